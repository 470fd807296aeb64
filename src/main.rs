//! Headless wavefield demo.
//!
//! Stands in for the browser host: regenerates the surface at a few
//! descriptor settings, then ticks the wave displacement and the bubble pool
//! at 60 Hz and prints a JSON run summary.

use anyhow::Result;
use wavefield::{
    GridDescriptor, GridMeshGenerator, InstanceTransformProducer, ParticlePool, PerlinSampler,
    PoolConfig,
};

fn main() -> Result<()> {
    env_logger::init();

    let sampler = PerlinSampler::new(7, 0.35);
    let mut generator = GridMeshGenerator::new(42);

    // A control surface would feed new descriptors on slider changes; each
    // one replaces the previous mesh wholesale.
    let mut mesh = generator.generate(&GridDescriptor::square(10.0, 20)?, Some(&sampler));
    log::info!(
        "surface: {} vertices, {} triangles",
        mesh.buffers.vertex_count(),
        mesh.buffers.triangle_count()
    );

    let config = PoolConfig::default();
    let mut pool = ParticlePool::with_config(config, 42)?;
    let mut producer = InstanceTransformProducer::new();

    let dt = 1.0 / 60.0;
    let mut time = 0.0;
    let frames = 600;
    let mut peak_alive = 0;

    for frame in 0..frames {
        time += dt;
        mesh.seed.displace(&mut mesh.buffers, time);
        pool.update(dt);
        let transforms = producer.produce(&pool);

        peak_alive = peak_alive.max(pool.alive_count());
        if frame % 120 == 0 {
            log::info!(
                "frame {:3}: {:2} bubbles alive, {} instance transforms",
                frame,
                pool.alive_count(),
                transforms.len()
            );
        }
    }

    let summary = serde_json::json!({
        "frames": frames,
        "simulated_seconds": time,
        "vertices": mesh.buffers.vertex_count(),
        "triangles": mesh.buffers.triangle_count(),
        "pool_capacity": pool.capacity(),
        "bubbles_alive": pool.alive_count(),
        "peak_bubbles_alive": peak_alive,
        "pending_emission": pool.pending_emission(),
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
