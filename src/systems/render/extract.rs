use super::scene::MeshInstance;

/// Floats per instance: id, position (3), orientation (4), size (3), hue.
pub const INSTANCE_STRIDE: usize = 12;

/// Pack live meshes into the transfer buffer, tightly, in slot order.
/// Returns the number of instances written.
pub(super) fn pack_instances(meshes: &[Option<MeshInstance>], out: &mut Vec<f32>) -> usize {
    out.clear();
    let mut count = 0;
    for (slot, mesh) in meshes.iter().enumerate() {
        let Some(mesh) = mesh else { continue };
        let size = mesh.half_extents * 2.0;
        out.extend_from_slice(&[
            slot as f32,
            mesh.position.x,
            mesh.position.y,
            mesh.position.z,
            mesh.orientation.x,
            mesh.orientation.y,
            mesh.orientation.z,
            mesh.orientation.w,
            size.x,
            size.y,
            size.z,
            mesh.hue,
        ]);
        count += 1;
    }
    count
}
