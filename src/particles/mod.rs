pub mod particle;
pub mod pool;
pub mod transforms;

pub use particle::Particle;
pub use pool::{ParticlePool, PoolConfig};
pub use transforms::{InstanceRaw, InstanceTransform, InstanceTransformProducer};
