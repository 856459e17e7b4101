//! Skinning — rest pose каждого piece из bone weights
//!
//! Load time: MeshSource (сырые буферы loader'а) → LoadedMesh (skinned или static
//! fallback). Per frame: SkeletalSampler смешивает bone матрицы и трансформирует
//! bind-pose вершины.
//!
//! Ошибки skin данных — configuration failure конкретного mesh, не раунда:
//! mesh деградирует до static pose, остальные продолжают работать.

pub mod error;
pub mod mesh;
pub mod sampler;


pub use error::*;
pub use mesh::*;
pub use sampler::*;
