//! Scene side of the game: the `SceneRenderer` collaborator contract and the
//! `SceneBuffer` implementation that hands flat instance data to JS.

mod camera;
mod extract;
mod scene;

pub use camera::Camera;
pub use extract::INSTANCE_STRIDE;
pub use scene::{MeshHandle, MeshInstance, SceneBuffer, SceneRenderer};
