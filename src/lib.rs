pub mod constants;
pub mod error;
pub mod particles;
pub mod terrain;

pub use error::{WavefieldError, WavefieldResult};
pub use particles::{
    InstanceRaw, InstanceTransform, InstanceTransformProducer, Particle, ParticlePool, PoolConfig,
};
pub use terrain::{
    AnimationSeed, GeneratedMesh, GridDescriptor, GridMeshGenerator, MeshBuffers, NoiseSampler,
    NormalAccumulator, PerlinSampler, RenderVertex, SimplexSampler, Vertex, VertexPhase,
};
