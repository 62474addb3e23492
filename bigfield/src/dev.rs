/// Write a series of `criterion`-based benchmarks for a field.
///
/// `$field` must evaluate to a [`PrimeField`](crate::PrimeField) with a square root strategy,
/// and `$fe_a`/`$fe_b` to nonzero [`BigInt`](crate::num_bigint::BigInt) elements of it.
#[macro_export]
macro_rules! bench_field {
    { $name:ident, $desc:expr, $field:expr, $fe_a:expr, $fe_b:expr } => {
        fn bench_add<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("add", |b| b.iter(|| field.add(&x, &y)));
        }

        fn bench_sub<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("sub", |b| b.iter(|| field.subtract(&x, &y)));
        }

        fn bench_mul<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            let y = core::hint::black_box($fe_b);
            group.bench_function("mul", |b| b.iter(|| field.multiply(&x, &y)));
        }

        fn bench_neg<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("neg", |b| b.iter(|| field.additive_inverse(&x)));
        }

        fn bench_reciprocal<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("reciprocal", |b| b.iter(|| field.reciprocal(&x)));
        }

        fn bench_pow<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            let e = core::hint::black_box($fe_b);
            group.bench_function("pow", |b| b.iter(|| field.power(&x, &e)));
        }

        fn bench_qr<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("qr", |b| b.iter(|| field.qr(&x)));
        }

        fn bench_sqrt<M: ::criterion::measurement::Measurement>(
            group: &mut ::criterion::BenchmarkGroup<'_, M>,
        ) {
            let field = $field;
            let x = core::hint::black_box($fe_a);
            group.bench_function("sqrt", |b| b.iter(|| field.sqrt(&x)));
        }

        fn $name(c: &mut ::criterion::Criterion) {
            let mut group = c.benchmark_group($desc);
            bench_add(&mut group);
            bench_sub(&mut group);
            bench_mul(&mut group);
            bench_neg(&mut group);
            bench_reciprocal(&mut group);
            bench_pow(&mut group);
            bench_qr(&mut group);
            bench_sqrt(&mut group);
            group.finish();
        }
    };
}

/// Implement all modulus-independent tests for a [`PrimeField`](crate::PrimeField).
#[macro_export]
macro_rules! test_prime_field {
    ($field:expr) => {
        $crate::test_field_identity!($field);
        $crate::test_field_invert!($field);
        $crate::test_field_power!($field);
        $crate::test_field_qr!($field);
    };
}

/// Implement field element identity tests.
#[macro_export]
macro_rules! test_field_identity {
    ($field:expr) => {
        #[test]
        fn zero_is_additive_identity() {
            let field = $field;
            let zero = $crate::num_bigint::BigInt::from(0u8);
            let one = $crate::num_bigint::BigInt::from(1u8);
            assert_eq!(field.add(&zero, &zero), zero);
            assert_eq!(field.add(&one, &zero), one);
            assert_eq!(field.subtract(&one, &zero), one);
            assert_eq!(field.additive_inverse(&zero), zero);
        }

        #[test]
        fn one_is_multiplicative_identity() {
            let field = $field;
            let one = $crate::num_bigint::BigInt::from(1u8);
            let two = $crate::num_bigint::BigInt::from(2u8);
            assert_eq!(field.multiply(&one, &one), one);
            assert_eq!(field.multiply(&two, &one), two);
            assert_eq!(field.divide(&two, &one).unwrap(), two);
        }
    };
}

/// Implement field element inversion tests.
#[macro_export]
macro_rules! test_field_invert {
    ($field:expr) => {
        #[test]
        fn invert() {
            let field = $field;
            let one = $crate::num_bigint::BigInt::from(1u8);
            assert_eq!(field.reciprocal(&one).unwrap(), one);

            let three = field.add(&field.add(&one, &one), &one);
            let inv_three = field.reciprocal(&three).unwrap();
            assert_eq!(field.multiply(&three, &inv_three), one);

            let minus_three = field.additive_inverse(&three);
            let inv_minus_three = field.reciprocal(&minus_three).unwrap();
            assert_eq!(inv_minus_three, field.additive_inverse(&inv_three));
            assert_eq!(
                field.multiply(&three, &inv_minus_three),
                field.additive_inverse(&one)
            );

            let zero = $crate::num_bigint::BigInt::from(0u8);
            assert_eq!(
                field.reciprocal(&zero),
                Err($crate::Error::InvalidInverseInput)
            );
            assert_eq!(
                field.reciprocal(field.modulus()),
                Err($crate::Error::InvalidInverseInput)
            );
        }
    };
}

/// Implement exponentiation tests.
#[macro_export]
macro_rules! test_field_power {
    ($field:expr) => {
        #[test]
        fn fermat_little_theorem() {
            let field = $field;
            let zero = $crate::num_bigint::BigInt::from(0u8);
            let one = $crate::num_bigint::BigInt::from(1u8);
            let p_minus_one = field.modulus() - 1u8;

            for n in [1u64, 2, 3, 5, 7, 1 << 32, u64::MAX] {
                let a = $crate::num_bigint::BigInt::from(n);
                assert_eq!(field.power(&a, &zero).unwrap(), one);
                if field.reduce(&a) != zero {
                    assert_eq!(field.power(&a, &p_minus_one).unwrap(), one);
                }
            }
        }

        #[test]
        fn negative_exponent() {
            let field = $field;
            let two = $crate::num_bigint::BigInt::from(2u8);
            let minus_one = $crate::num_bigint::BigInt::from(-1i8);
            assert_eq!(
                field.power(&two, &minus_one),
                Err($crate::Error::InvalidExponent)
            );
        }
    };
}

/// Implement quadratic residue tests.
#[macro_export]
macro_rules! test_field_qr {
    ($field:expr) => {
        #[test]
        fn squares_are_residues() {
            let field = $field;
            for n in 1u64..32 {
                let x = $crate::num_bigint::BigInt::from(n);
                let square = field.multiply(&x, &x);
                if square != $crate::num_bigint::BigInt::from(0u8) {
                    assert!(field.qr(&square), "{square} is a square");
                }
            }
        }
    };
}

/// Implement field element square root tests.
#[macro_export]
macro_rules! test_field_sqrt {
    ($field:expr) => {
        #[test]
        fn sqrt() {
            let field = $field;
            for &n in &[1u64, 4, 9, 16, 25, 36, 49, 64] {
                let fe = field.reduce(&$crate::num_bigint::BigInt::from(n));
                let sqrt = field.sqrt(&fe);
                assert_eq!(field.multiply(&sqrt, &sqrt), fe);
                assert_eq!(field.sqrt_checked(&fe), Some(sqrt));
            }
        }
    };
}
