use glam::{Quat, Vec3};

use crate::core::{Axis, EngineError};
use crate::render::{MeshHandle, MeshInstance, SceneRenderer};
use crate::rigid_body::BodyHandle;
use crate::rigid_body_system::RigidBodyWorld;

use super::place::Cut;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockMode {
    /// Placed layer; kinematic.
    Resting,
    /// Active layer driven by game logic; kinematic.
    Moving,
    /// Overhang simulated by the physics world.
    Falling,
}

/// Everything needed to spawn a block.
#[derive(Clone, Copy, Debug)]
pub struct BlockSpec {
    pub position: Vec3,
    pub width: f32,
    pub depth: f32,
    pub height: f32,
    pub axis: Option<Axis>,
    pub mode: BlockMode,
    pub mass: f32,
    pub hue: f32,
}

/// One box of the game: a rigid body paired with a mesh.
///
/// The block exclusively owns both handles. Every mutation goes through a
/// method that updates body and mesh together.
#[derive(Debug)]
pub struct Block {
    position: Vec3,
    orientation: Quat,
    width: f32,
    depth: f32,
    height: f32,
    axis: Option<Axis>,
    mode: BlockMode,
    hue: f32,
    body: BodyHandle,
    mesh: MeshHandle,
}

impl Block {
    pub fn spawn<W, R>(spec: BlockSpec, world: &mut W, scene: &mut R) -> Result<Self, EngineError>
    where
        W: RigidBodyWorld + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        let half_extents = Vec3::new(spec.width, spec.height, spec.depth) * 0.5;
        let mass = match spec.mode {
            BlockMode::Falling => spec.mass,
            BlockMode::Resting | BlockMode::Moving => 0.0,
        };
        let body = world.create_body(half_extents, mass, spec.position)?;
        let mesh = scene.add_mesh(MeshInstance {
            position: spec.position,
            orientation: Quat::IDENTITY,
            half_extents,
            hue: spec.hue,
        });

        Ok(Self {
            position: spec.position,
            orientation: Quat::IDENTITY,
            width: spec.width,
            depth: spec.depth,
            height: spec.height,
            axis: spec.axis,
            mode: spec.mode,
            hue: spec.hue,
            body,
            mesh,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn depth(&self) -> f32 {
        self.depth
    }

    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn mode(&self) -> BlockMode {
        self.mode
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth) * 0.5
    }

    /// Coordinate of the centre along `axis`.
    pub fn coord(&self, axis: Axis) -> f32 {
        axis.get(self.position)
    }

    /// Size along `axis` (width for X, depth for Z).
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.width,
            Axis::Z => self.depth,
        }
    }

    /// Move a kinematic block along `axis`.
    pub fn slide<W, R>(&mut self, axis: Axis, amount: f32, world: &mut W, scene: &mut R) -> Result<(), EngineError>
    where
        W: RigidBodyWorld + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        let coord = axis.get(self.position) + amount;
        axis.set(&mut self.position, coord);
        world.set_position(self.body, self.position)?;
        scene.update_mesh(self.mesh, self.position, self.orientation);
        Ok(())
    }

    /// Shrink to the overlapping part and rebuild the collision shape.
    pub fn cut<W, R>(&mut self, axis: Axis, cut: &Cut, world: &mut W, scene: &mut R) -> Result<(), EngineError>
    where
        W: RigidBodyWorld + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        match axis {
            Axis::X => self.width = cut.overlap,
            Axis::Z => self.depth = cut.overlap,
        }
        axis.set(&mut self.position, cut.kept_coord);

        world.set_position(self.body, self.position)?;
        world.replace_shape(self.body, self.half_extents())?;
        scene.resize_mesh(self.mesh, self.half_extents());
        scene.update_mesh(self.mesh, self.position, self.orientation);
        Ok(())
    }

    /// The active layer came to rest on the stack.
    pub fn settle(&mut self) {
        if self.mode == BlockMode::Moving {
            self.mode = BlockMode::Resting;
        }
    }

    /// Hand the block over to the physics world.
    pub fn release<W>(&mut self, mass: f32, world: &mut W) -> Result<(), EngineError>
    where
        W: RigidBodyWorld + ?Sized,
    {
        world.set_mass(self.body, mass)?;
        self.mode = BlockMode::Falling;
        Ok(())
    }

    /// Copy the simulated pose into the block and its mesh.
    pub fn sync_from_physics<W, R>(&mut self, world: &W, scene: &mut R)
    where
        W: RigidBodyWorld + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        match world.transform(self.body) {
            Some(t) => {
                self.position = t.position;
                self.orientation = t.orientation;
                scene.update_mesh(self.mesh, self.position, self.orientation);
            }
            None => log::warn!("block: body {} vanished from the world", self.body.0),
        }
    }

    /// Release both the body and the mesh.
    pub fn dispose<W, R>(self, world: &mut W, scene: &mut R)
    where
        W: RigidBodyWorld + ?Sized,
        R: SceneRenderer + ?Sized,
    {
        world.remove_body(self.body);
        scene.remove_mesh(self.mesh);
    }
}
