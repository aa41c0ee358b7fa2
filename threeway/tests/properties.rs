//! Randomized checks of the laws every comparator must obey.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use threeway::derived::Extended;
use threeway::integer::{cmp_three_way, in_range, Safe};
use threeway::{hetero, sort, Category, Money, Outcome, Sorter, ThreeWay, TotalF64, UnorderedPolicy};

const ROUNDS: usize = 1000;

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(0x7472_6565)
}

fn money(rng: &mut SmallRng) -> Money {
    Money::from_cents(rng.gen_range(-2_000..2_000))
}

fn float(rng: &mut SmallRng) -> f64 {
    if rng.gen_bool(0.1) { f64::NAN } else { f64::from(rng.gen_range(-20..20_i32)) / 4.0 }
}

#[test]
fn reflexive() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let m = money(&mut rng);
        assert_eq!(m.compare(&m), Outcome::Equal);
        let t = (rng.gen_range(0..4_u8), m.to_string(), vec![m; rng.gen_range(0..3)]);
        assert_eq!(t.compare(&t), Outcome::Equal);
        let e = Extended::new(m, TotalF64(float(&mut rng)));
        assert!(e.equal(&e));
    }
}

#[test]
fn antisymmetric() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let (a, b) = (money(&mut rng), money(&mut rng));
        assert_eq!(a.compare(&b), b.compare(&a).reverse());

        let (x, y) = ((float(&mut rng), rng.gen_range(0..3_i32)), (float(&mut rng), rng.gen_range(0..3_i32)));
        assert_eq!(x.compare(&y), y.compare(&x).reverse());
        if x.compare(&y) == Outcome::Unordered {
            assert!(x.0.is_nan() || y.0.is_nan());
            assert!(x.not_equal(&y));
            assert!(!x.less_equal(&y) && !x.greater_equal(&y));
        }
    }
}

#[test]
fn transitive() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let mut triple = [money(&mut rng), money(&mut rng), money(&mut rng)];
        sort::sort(&mut triple);
        let [a, b, c] = triple;
        assert!(a.less_equal(&b) && b.less_equal(&c));
        assert!(a.less_equal(&c));
        if a.less_than(&b) || b.less_than(&c) {
            assert!(a.less_than(&c));
        }
    }
}

#[test]
fn field_order_matches_numeric_order() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let (a, b) = (money(&mut rng), money(&mut rng));
        assert_eq!(a.compare(&b), Outcome::from(a.total_cents().cmp(&b.total_cents())));
    }
}

#[test]
fn composites_take_the_weakest_category() {
    assert_eq!(<(Money, u8) as ThreeWay>::CATEGORY, Category::Strong);
    assert_eq!(<(Money, f32) as ThreeWay>::CATEGORY, Category::Partial);
    assert_eq!(<Extended<Money, Vec<f64>> as ThreeWay>::CATEGORY, Category::Partial);
    assert_eq!(<Option<[TotalF64; 2]> as ThreeWay>::CATEGORY, Category::Strong);
}

#[test]
fn heterogeneous_symmetry() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let m = money(&mut rng);
        let foreign = f64::from(rng.gen_range(-2_000..2_000_i32)) / 100.0;
        let forward = hetero::try_compare(&m, foreign).unwrap();
        let backward = hetero::try_compare_foreign(foreign, &m).unwrap();
        assert_eq!(forward, backward.reverse());

        let pair = (rng.gen_range(-20..20_i64), rng.gen_range(-10..110_i64));
        match (hetero::try_compare(&m, pair), hetero::try_compare_foreign(pair, &m)) {
            (Ok(x), Ok(y)) => assert_eq!(x, y.reverse()),
            (Err(x), Err(y)) => assert_eq!(x, y),
            other => panic!("asymmetric conversion: {:?}", other),
        }
    }
}

#[test]
fn derived_types_delegate_to_the_base() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let x = Extended::new((rng.gen_range(0..3_i32), rng.gen_range(0..3_i32)), float(&mut rng));
        let y = Extended::new((rng.gen_range(0..3_i32), rng.gen_range(0..3_i32)), float(&mut rng));
        let base = x.base.compare(&y.base);
        if base != Outcome::Equal {
            assert_eq!(x.compare(&y), base);
        } else {
            assert_eq!(x.compare(&y), x.ext.compare(&y.ext));
        }
    }
}

#[test]
fn partial_sorts_are_permutations() {
    let mut rng = rng();
    for _ in 0..100 {
        let len = rng.gen_range(0..40);
        let input = (0..len).map(|_| float(&mut rng)).collect::<Vec<_>>();
        for policy in [UnorderedPolicy::Exclude, UnorderedPolicy::Trailing, UnorderedPolicy::Unspecified] {
            let mut values = input.clone();
            let mut set_aside = Sorter::new(policy).sort_partial(&mut values);

            let ordered = values.iter().copied().filter(|x| !x.is_nan()).collect::<Vec<_>>();
            if policy != UnorderedPolicy::Unspecified {
                assert!(ordered.windows(2).all(|pair| pair[0] <= pair[1]), "{:?}", values);
            }
            if policy == UnorderedPolicy::Trailing {
                assert!(values[ordered.len()..].iter().all(|x| x.is_nan()));
            }

            values.append(&mut set_aside);
            let mut output = values.into_iter().map(TotalF64).collect::<Vec<_>>();
            let mut expected = input.iter().copied().map(TotalF64).collect::<Vec<_>>();
            sort::sort(&mut output);
            sort::sort(&mut expected);
            assert!(output.compare(&expected).is_eq(), "{}", policy);
        }
    }
}

#[test]
fn integers_compare_by_value() {
    let mut rng = rng();
    for _ in 0..ROUNDS {
        let x: i64 = rng.gen();
        let y: u64 = rng.gen();
        let expected = i128::from(x).cmp(&i128::from(y));
        assert_eq!(cmp_three_way(x, y), Outcome::from(expected));
        assert_eq!(Safe(y).compare(&Safe(x)), Outcome::from(expected.reverse()));
        assert_eq!(in_range::<u64, _>(x), x >= 0);
        assert_eq!(in_range::<i64, _>(y), y <= i64::MAX as u64);
    }
}
