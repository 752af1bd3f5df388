use ferrite_softmax::{compare_implementations, grad_check_sparse, GradCheckConfig, Matrix, SoftmaxImpl};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn main() -> ferrite_softmax::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Shapes of a CIFAR-10 dev batch: 500 images, 3072 pixels + bias, 10 classes.
    let (n, d, c) = (500, 3073, 10);
    let mut rng = StdRng::seed_from_u64(231);
    let w = Matrix::randn(d, c, 1e-4, &mut rng);
    let x = Matrix::randn(n, d, 1.0, &mut rng);
    let y: Vec<usize> = (0..n).map(|_| rng.gen_range(0..c)).collect();

    let (loss, _) = SoftmaxImpl::Vectorized.compute(&w, &x, &y, 0.0)?;
    println!("loss: {loss:.6}  (sanity check: -ln(0.1) = {:.6})", -(0.1_f64).ln());

    let cmp = compare_implementations(&w, &x, &y, 5e-6)?;
    println!("naive loss:      {:.6e}  computed in {} us", cmp.naive_loss, cmp.naive_elapsed_us);
    println!("vectorized loss: {:.6e}  computed in {} us", cmp.vectorized_loss, cmp.vectorized_elapsed_us);
    println!("loss difference: {:.3e}", cmp.loss_rel_error);
    println!("gradient difference: {:.3e}", cmp.grad_difference);

    let config = GradCheckConfig::seeded(7);
    for reg in [0.0, 5e1] {
        let report = grad_check_sparse(|w| SoftmaxImpl::Naive.compute(w, &x, &y, reg), &w, &config)?;
        println!("gradient check, reg = {reg}:");
        for s in &report.samples {
            println!(
                "  numerical: {:+.6e} analytic: {:+.6e}, relative error: {:.3e}",
                s.numerical, s.analytic, s.rel_error
            );
        }
    }

    Ok(())
}
