use param_pipeline::prelude::*;
use param_pipeline::{Lookup, ParamId, StepKind};
use param_test_utils::{demo_registry, init_tracing, registry_with, FLAG_A, FLAG_B, UNKNOWN};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::sync::Arc;

#[test]
fn load_only() {
    init_tracing();
    let param = Parameter::<u16>::build(&demo_registry(), Pipeline::load(Load::<u16>::new(FLAG_A)))
        .unwrap();
    assert_eq!(param.value(), 123);
}

#[test]
fn load_then_min_raises() {
    let param = Parameter::<u16>::build(
        &demo_registry(),
        Pipeline::load(Load::<u16>::new(FLAG_A)).then(Min::new(160u32)),
    )
    .unwrap();
    assert_eq!(param.value(), 160);
}

#[test]
fn load_then_max_lowers() {
    let param = Parameter::<u16>::build(
        &demo_registry(),
        Pipeline::load(Load::<u16>::new(FLAG_A)).then(Max::new(88u32)),
    )
    .unwrap();
    assert_eq!(param.value(), 88);
}

#[test]
fn load_inside_bounds_is_untouched() {
    let param = Parameter::<u16>::build(
        &demo_registry(),
        Pipeline::load(Load::<u16>::new(FLAG_A))
            .then(Min::new(88u32))
            .then(Max::new(160u32)),
    )
    .unwrap();
    assert_eq!(param.value(), 123);
}

#[test]
fn miss_default_then_clamps_in_list_order() {
    init_tracing();
    // 123345 wraps to 57809 in u16, Min(1234) keeps it, Max(160) wins last
    let param = Parameter::<u16>::build(
        &demo_registry(),
        Pipeline::load(Load::<u16>::new(UNKNOWN))
            .then(DefaultValue::new(123_345u32))
            .then(Min::new(1234u32))
            .then(Max::new(160u32)),
    )
    .unwrap();
    assert_eq!(param.value(), 160);
}

#[test]
fn duration_output_from_ratio() {
    let pipeline = Pipeline::load(Load::<u16>::new(FLAG_B))
        .then(DefaultValue::new(1230u32))
        .then(Ratio::fixed::<1, 10>())
        .then(Max::new(160u32))
        .validate()
        .unwrap();

    assert_eq!(
        pipeline.kinds(),
        &[
            StepKind::Load,
            StepKind::Default,
            StepKind::Ratio,
            StepKind::Max
        ]
    );

    let timeout = Parameter::<Millis<u16>>::new(&demo_registry(), &pipeline);
    assert_eq!(timeout.value().count(), 55);
    assert_eq!(timeout.value().to_duration(), std::time::Duration::from_millis(55));
}

#[test]
fn duration_output_from_default_when_missing() {
    let pipeline = Pipeline::load(Load::<u16>::new(UNKNOWN))
        .then(DefaultValue::new(1230u32))
        .then(Ratio::fixed::<1, 10>())
        .then(Max::new(160u32))
        .validate()
        .unwrap();

    let timeout = Parameter::<Secs<u32>>::new(&demo_registry(), &pipeline);
    assert_eq!(timeout.value(), Secs::new(123));
}

#[test]
fn tuple_steps_match_chained_steps() {
    let registry = demo_registry();

    let chained = Parameter::<u16>::build(
        &registry,
        Pipeline::load(Load::<u16>::new(FLAG_B))
            .then(Offset::new(5u8))
            .then(Max::new(500u32)),
    )
    .unwrap();

    let tupled = Parameter::<u16>::build(
        &registry,
        Pipeline::load(Load::<u16>::new(FLAG_B)).then((Offset::new(5u8), Max::new(500u32))),
    )
    .unwrap();

    assert_eq!(chained, tupled);
    assert_eq!(tupled.value(), 500);
}

#[test]
fn narrowing_load_truncates() {
    let registry = registry_with(&[(7, 0x155)]);
    let param =
        Parameter::<u8>::build(&registry, Pipeline::load(Load::<u8>::new(7u64))).unwrap();
    assert_eq!(param.value(), 0x55);
}

#[test]
fn carried_type_differs_from_output() {
    // Arithmetic runs in u8, output is widened afterwards
    let registry = registry_with(&[(7, 200)]);
    let param = Parameter::<u32>::build(
        &registry,
        Pipeline::load(Load::<u8>::new(7u64)).then(Offset::new(100u8)),
    )
    .unwrap();
    assert_eq!(param.value(), 44);
}

#[test]
fn user_defined_output() {
    #[derive(Debug, Clone, PartialEq)]
    struct Celsius(f64);

    impl Adapt<i16> for Celsius {
        fn adapt(value: Option<i16>) -> Self {
            Celsius(value.map_or(20.0, |tenths| f64::from(tenths) / 10.0))
        }
    }

    let registry = registry_with(&[(1, 215)]);
    let present = Parameter::<Celsius>::build(
        &registry,
        Pipeline::load(Load::<i16>::new(1u64)).then(Max::new(300i16)),
    )
    .unwrap();
    assert_eq!(present.value(), Celsius(21.5));

    let absent =
        Parameter::<Celsius>::build(&registry, Pipeline::load(Load::<i16>::new(2u64))).unwrap();
    assert_eq!(absent.into_value(), Celsius(20.0));
}

#[test]
fn truncating_denominator_rejected_before_resolution() {
    struct PanickingRegistry;

    impl Lookup for PanickingRegistry {
        fn lookup(&self, _id: ParamId) -> Option<u64> {
            panic!("registry must not be read for a rejected pipeline");
        }
    }

    let err = Parameter::<u8>::build(
        &PanickingRegistry,
        Pipeline::load(Load::<u8>::new(FLAG_A)).then(Ratio::new(3u32, 512u32).unwrap()),
    )
    .unwrap_err();

    assert_eq!(err.kind(), StepKind::Ratio);
    assert_eq!(err.position(), 1);
}

#[test]
fn registry_shared_across_threads() {
    let registry = Arc::new(demo_registry());
    let pipeline = Pipeline::load(Load::<u16>::new(FLAG_B))
        .then(Ratio::fixed::<1, 10>())
        .validate()
        .unwrap();

    let (registry, pipeline) = (&registry, &pipeline);
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(move || Parameter::<u16>::new(registry, pipeline).value()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 55);
        }
    });
}

#[test]
fn registry_loaded_from_document() {
    let registry = param_pipeline::Registry::from_toml_str(
        "[entries]\n\"0x0011001100110011\" = 123\n",
    )
    .unwrap();

    let param =
        Parameter::<u16>::build(&registry, Pipeline::load(Load::<u16>::new(FLAG_A))).unwrap();
    assert_eq!(param.value(), 123);
}

proptest! {
    #[test]
    fn prop_missing_id_yields_zero(id in any::<u64>()) {
        prop_assume!(ParamId(id) != FLAG_A && ParamId(id) != FLAG_B);

        let param = Parameter::<u16>::build(&demo_registry(), Pipeline::load(Load::<u16>::new(id)))
            .unwrap();
        prop_assert_eq!(param.value(), 0);
    }

    #[test]
    fn prop_present_id_yields_cast_value(raw in any::<u64>()) {
        let registry = registry_with(&[(9, raw)]);

        let narrow = Parameter::<u8>::build(&registry, Pipeline::load(Load::<u8>::new(9u64)))
            .unwrap();
        let wide = Parameter::<u64>::build(&registry, Pipeline::load(Load::<u64>::new(9u64)))
            .unwrap();

        prop_assert_eq!(u64::from(narrow.value()), raw & 0xFF);
        prop_assert_eq!(wide.value(), raw);
    }

    #[test]
    fn prop_default_only_fills_misses(raw in any::<u16>(), fallback in any::<u16>()) {
        let registry = registry_with(&[(9, u64::from(raw))]);

        let hit = Parameter::<u16>::build(
            &registry,
            Pipeline::load(Load::<u16>::new(9u64)).then(DefaultValue::new(fallback)),
        )
        .unwrap();
        let miss = Parameter::<u16>::build(
            &registry,
            Pipeline::load(Load::<u16>::new(10u64)).then(DefaultValue::new(fallback)),
        )
        .unwrap();

        prop_assert_eq!(hit.value(), raw);
        prop_assert_eq!(miss.value(), fallback);
    }

    #[test]
    fn prop_resolution_is_deterministic(raw in any::<u32>(), lo in any::<u32>(), hi in any::<u32>()) {
        let registry = registry_with(&[(9, u64::from(raw))]);
        let pipeline = Pipeline::load(Load::<u32>::new(9u64))
            .then(Min::new(lo))
            .then(Max::new(hi))
            .validate()
            .unwrap();

        let first = Parameter::<u32>::new(&registry, &pipeline);
        let second = Parameter::<u32>::new(&registry, &pipeline);

        prop_assert_eq!(first, second);
        prop_assert_eq!(first.value(), raw.max(lo).min(hi));
    }
}
