use glam::{Quat, Vec3};

use super::camera::Camera;
use super::extract::{pack_instances, INSTANCE_STRIDE};

/// Opaque handle to a mesh owned by a `SceneRenderer`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshHandle(pub u32);

/// Everything the renderer needs to draw one box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshInstance {
    pub position: Vec3,
    pub orientation: Quat,
    pub half_extents: Vec3,
    pub hue: f32,
}

/// Rendering collaborator consumed by the stack engine.
pub trait SceneRenderer {
    fn add_mesh(&mut self, mesh: MeshInstance) -> MeshHandle;

    fn update_mesh(&mut self, handle: MeshHandle, position: Vec3, orientation: Quat);

    fn resize_mesh(&mut self, handle: MeshHandle, half_extents: Vec3);

    fn remove_mesh(&mut self, handle: MeshHandle);

    fn follow_camera(&mut self, target_y: f32, dt_ms: f32);

    fn reset_camera(&mut self);

    fn camera_y(&self) -> f32;

    fn render(&mut self);

    fn mesh_count(&self) -> usize;
}

/// Retained scene whose `render()` packs every mesh into a flat `f32`
/// buffer that JS reads straight out of wasm memory.
pub struct SceneBuffer {
    meshes: Vec<Option<MeshInstance>>,
    free_slots: Vec<u32>,
    live: usize,
    camera: Camera,
    instances: Vec<f32>,
    instance_count: usize,
    frames: u64,
}

impl SceneBuffer {
    pub fn new(camera: Camera) -> Self {
        Self {
            meshes: Vec::new(),
            free_slots: Vec::new(),
            live: 0,
            camera,
            instances: Vec::with_capacity(64 * INSTANCE_STRIDE),
            instance_count: 0,
            frames: 0,
        }
    }

    pub fn mesh(&self, handle: MeshHandle) -> Option<&MeshInstance> {
        self.meshes.get(handle.0 as usize)?.as_ref()
    }

    fn mesh_mut(&mut self, handle: MeshHandle) -> Option<&mut MeshInstance> {
        let mesh = self.meshes.get_mut(handle.0 as usize).and_then(Option::as_mut);
        if mesh.is_none() {
            log::warn!("scene: unknown mesh {}", handle.0);
        }
        mesh
    }

    /// Pointer to the packed instance buffer (for JS rendering)
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr()
    }

    /// Length of the packed buffer in floats
    pub fn instances_len(&self) -> usize {
        self.instances.len()
    }

    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    /// Instances written by the last `render()`
    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl SceneRenderer for SceneBuffer {
    fn add_mesh(&mut self, mesh: MeshInstance) -> MeshHandle {
        self.live += 1;
        if let Some(slot) = self.free_slots.pop() {
            self.meshes[slot as usize] = Some(mesh);
            return MeshHandle(slot);
        }
        self.meshes.push(Some(mesh));
        MeshHandle((self.meshes.len() - 1) as u32)
    }

    fn update_mesh(&mut self, handle: MeshHandle, position: Vec3, orientation: Quat) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.position = position;
            mesh.orientation = orientation;
        }
    }

    fn resize_mesh(&mut self, handle: MeshHandle, half_extents: Vec3) {
        if let Some(mesh) = self.mesh_mut(handle) {
            mesh.half_extents = half_extents;
        }
    }

    fn remove_mesh(&mut self, handle: MeshHandle) {
        if let Some(slot) = self.meshes.get_mut(handle.0 as usize) {
            if slot.take().is_some() {
                self.live -= 1;
                self.free_slots.push(handle.0);
            }
        }
    }

    fn follow_camera(&mut self, target_y: f32, dt_ms: f32) {
        self.camera.follow(target_y, dt_ms);
    }

    fn reset_camera(&mut self) {
        self.camera.reset();
    }

    fn camera_y(&self) -> f32 {
        self.camera.y()
    }

    fn render(&mut self) {
        self.instance_count = pack_instances(&self.meshes, &mut self.instances);
        self.frames += 1;
    }

    fn mesh_count(&self) -> usize {
        self.live
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box(x: f32, hue: f32) -> MeshInstance {
        MeshInstance {
            position: Vec3::new(x, 0.0, 0.0),
            orientation: Quat::IDENTITY,
            half_extents: Vec3::splat(0.5),
            hue,
        }
    }

    #[test]
    fn removed_slots_are_reused() {
        let mut scene = SceneBuffer::new(Camera::new(4.0, 0.008));
        let a = scene.add_mesh(unit_box(0.0, 30.0));
        let b = scene.add_mesh(unit_box(1.0, 34.0));
        scene.remove_mesh(a);
        assert_eq!(scene.mesh_count(), 1);

        let c = scene.add_mesh(unit_box(2.0, 38.0));
        assert_eq!(c, a);
        assert_ne!(c, b);
        assert_eq!(scene.mesh_count(), 2);
    }

    #[test]
    fn double_remove_is_harmless() {
        let mut scene = SceneBuffer::new(Camera::new(4.0, 0.008));
        let a = scene.add_mesh(unit_box(0.0, 30.0));
        scene.remove_mesh(a);
        scene.remove_mesh(a);
        assert_eq!(scene.mesh_count(), 0);
    }

    #[test]
    fn render_packs_live_meshes_tightly() {
        let mut scene = SceneBuffer::new(Camera::new(4.0, 0.008));
        let a = scene.add_mesh(unit_box(0.0, 30.0));
        scene.add_mesh(unit_box(1.0, 34.0));
        scene.remove_mesh(a);
        scene.render();

        assert_eq!(scene.instance_count(), 1);
        assert_eq!(scene.instances_len(), INSTANCE_STRIDE);
        let buf = scene.instances();
        assert_eq!(buf[0], 1.0); // slot id
        assert_eq!(buf[1], 1.0); // x
        assert_eq!(buf[7], 1.0); // qw
        assert_eq!(&buf[8..11], &[1.0, 1.0, 1.0]); // full size
        assert_eq!(buf[11], 34.0);
    }

    #[test]
    fn updates_land_on_the_live_mesh() {
        let mut scene = SceneBuffer::new(Camera::new(4.0, 0.008));
        let a = scene.add_mesh(unit_box(0.0, 30.0));
        scene.update_mesh(a, Vec3::new(0.0, 2.0, 0.0), Quat::from_rotation_y(0.5));
        scene.resize_mesh(a, Vec3::new(1.0, 0.5, 1.5));

        let mesh = scene.mesh(a).unwrap();
        assert_eq!(mesh.position.y, 2.0);
        assert_eq!(mesh.half_extents, Vec3::new(1.0, 0.5, 1.5));

        scene.remove_mesh(a);
        // Stale handles are logged and ignored.
        scene.update_mesh(a, Vec3::ZERO, Quat::IDENTITY);
        assert!(scene.mesh(a).is_none());

        scene.render();
        scene.render();
        assert_eq!(scene.frames(), 2);
        assert_eq!(scene.instance_count(), 0);
    }
}
