pub mod animation;
pub mod buffers;
pub mod descriptor;
pub mod generator;
pub mod normals;
pub mod sampler;

pub use animation::{AnimationSeed, VertexPhase};
pub use buffers::{MeshBuffers, RenderVertex, Vertex};
pub use descriptor::GridDescriptor;
pub use generator::{GeneratedMesh, GridMeshGenerator};
pub use normals::NormalAccumulator;
pub use sampler::{NoiseSampler, PerlinSampler, SimplexSampler};
