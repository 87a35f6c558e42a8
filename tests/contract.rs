use paramdist::stats::{ContinuousDistribution, Exponential, ParametricDistribution};
use rand::rngs::StdRng;
use rand::SeedableRng;

const TOL: f64 = 1e-12;

fn family() -> Vec<Box<dyn ContinuousDistribution<f64>>> {
    vec![
        Box::new(Exponential::<f64>::standard()),
        Box::new(Exponential::new(2.0, 1.0).unwrap()),
        Box::new(Exponential::new(0.1, -30.0).unwrap()),
    ]
}

#[test]
fn dyn_evaluation_matches_concrete() {
    let concrete = Exponential::new(2.0, 1.0).unwrap();
    let boxed: Box<dyn ContinuousDistribution<f64>> = Box::new(concrete);
    for &x in &[0.0, 1.0, 1.25, 4.0] {
        assert_eq!(boxed.pdf(x), concrete.pdf(x));
        assert_eq!(boxed.cdf(x), concrete.cdf(x));
        assert_eq!(boxed.complementary_cdf(x), concrete.complementary_cdf(x));
    }
    assert_eq!(boxed.dimension(), 1);
    assert_eq!(boxed.std_dev(), 0.5);
}

#[test]
fn dyn_clone_is_independent_copy() {
    let original = family();
    let copies: Vec<_> = original.iter().map(|d| d.clone_box()).collect();
    for (a, b) in original.iter().zip(&copies) {
        assert_eq!(a.mean(), b.mean());
        assert_eq!(a.variance(), b.variance());
        assert_eq!(a.range(), b.range());
    }
}

#[test]
fn dyn_quantile_roundtrip() {
    for d in family() {
        for &p in &[0.001, 0.1, 0.5, 0.9, 0.999] {
            let x = d.quantile(p).unwrap();
            assert!((d.cdf(x) - p).abs() < TOL, "p={p}: cdf(quantile(p))={}", d.cdf(x));
            let y = d.inverse_survival(p).unwrap();
            assert!((d.complementary_cdf(y) - p).abs() < TOL);
        }
    }
}

#[test]
fn dyn_standard_representative_shares_shape() {
    for d in family() {
        let s = d.standard_representative();
        assert_eq!(s.mean(), 1.0);
        assert_eq!(s.skewness(), d.skewness());
        assert_eq!(s.kurtosis(), d.kurtosis());
        for n in 0..6 {
            assert_eq!(s.standard_moment(n), d.standard_moment(n));
        }
    }
}

#[test]
fn dyn_sampling_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(2024);
    for d in family() {
        let range = d.range();
        for x in d.sample(&mut rng, 500) {
            assert!(range.contains(x), "{x} outside [{}, inf)", range.lower());
        }
    }
}

#[test]
fn parameter_roundtrip_through_generic_setter() {
    fn reparameterize<D: ParametricDistribution<f64, 2>>(d: &mut D, p: [f64; 2]) -> [f64; 2] {
        d.set_parameter(p).unwrap();
        d.parameter()
    }

    let mut e = Exponential::<f64>::standard();
    assert_eq!(reparameterize(&mut e, [3.0, -1.0]), [3.0, -1.0]);
    assert_eq!(e.range().lower(), -1.0);
    assert!((e.mean() - (-1.0 + 1.0 / 3.0)).abs() < TOL);
}
