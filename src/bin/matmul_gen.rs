use bench_inputs::{matmul, MatmulParams, INPUTS_DIR};
use tracing::info;

fn main() -> anyhow::Result<()> {
    bench_inputs::init_logging();

    let params = MatmulParams::default();
    let mut rng = rand::thread_rng();
    let case = matmul::generate(&params, &mut rng);

    info!("writing input file");
    let path = case.write_to(INPUTS_DIR)?;
    info!(path = %path.display(), "done");

    Ok(())
}
