use bench_inputs::{qsort, QsortParams, INPUTS_DIR};
use tracing::info;

fn main() -> anyhow::Result<()> {
    bench_inputs::init_logging();

    let params = QsortParams::default();
    let mut rng = rand::thread_rng();
    let case = qsort::generate(&params, &mut rng);

    info!("writing input file");
    let path = case.write_to(INPUTS_DIR)?;
    info!(path = %path.display(), "done");

    Ok(())
}
