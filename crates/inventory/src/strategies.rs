//! Composable random-value builders for property-based tests.
//!
//! Each entity strategy accepts optional fixed overrides per field and draws
//! randomly otherwise, so a test can pin just the field it cares about.
//! Enabled for this crate's own tests and, behind the `testkit` feature, for
//! downstream test suites:
//!
//! ```toml
//! [dev-dependencies]
//! stockroom-inventory = { path = "../inventory", features = ["testkit"] }
//! ```

use proptest::prelude::*;
use serde_json::Value;

use stockroom_core::{BatchId, BinId, PropValue, SkuId};

use crate::{Batch, Bin, Sku};

/// Lowercase field names for generated property mappings. The literal key
/// `id` is reserved by the wire fold and never generated.
pub fn field_names() -> impl Strategy<Value = String> {
    "[a-z_]{1,12}".prop_filter("'id' is reserved", |name| name != "id")
}

fn prop_leaves() -> impl Strategy<Value = PropValue> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e12f64..1.0e12).prop_map(Value::from),
        "[ -~]{0,16}".prop_map(Value::from),
    ]
}

/// Arbitrarily nested JSON-like property value. The depth bound exists only
/// to keep generation tractable; the model itself has no depth limit.
pub fn prop_values() -> impl Strategy<Value = PropValue> {
    prop_leaves().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::hash_map(field_names(), inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

/// Mapping-shaped property value, the shape `from_wire` folds into.
pub fn prop_objects() -> impl Strategy<Value = PropValue> {
    prop::collection::hash_map(field_names(), prop_values(), 0..4)
        .prop_map(|entries| Value::Object(entries.into_iter().collect()))
}

/// Canonical bin labels (`BIN` + zero-padded serial).
pub fn bin_ids() -> impl Strategy<Value = BinId> {
    (0u32..1_000_000).prop_map(BinId::from_serial)
}

/// Canonical sku labels.
pub fn sku_ids() -> impl Strategy<Value = SkuId> {
    (0u32..1_000_000).prop_map(SkuId::from_serial)
}

/// Canonical batch labels.
pub fn batch_ids() -> impl Strategy<Value = BatchId> {
    (0u32..1_000_000).prop_map(BatchId::from_serial)
}

/// Short identifying codes (barcodes).
pub fn codes() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[abc]{0,8}", 0..4)
}

/// Display names.
pub fn display_names() -> impl Strategy<Value = String> {
    "[A-C]{0,12}"
}

fn fixed<T: Clone + core::fmt::Debug + 'static>(value: T) -> BoxedStrategy<T> {
    Just(value).boxed()
}

/// Random bins; pass `Some(..)` to pin a field.
pub fn bins(id: Option<BinId>, props: Option<PropValue>) -> impl Strategy<Value = Bin> {
    let id = id.map_or_else(|| bin_ids().boxed(), fixed);
    let props = props.map_or_else(|| prop_values().boxed(), fixed);
    (id, props).prop_map(|(id, props)| Bin::new(id, props))
}

/// Random skus; pass `Some(..)` to pin a field.
pub fn skus(
    id: Option<SkuId>,
    name: Option<String>,
    owned_codes: Option<Vec<String>>,
    associated_codes: Option<Vec<String>>,
    props: Option<PropValue>,
) -> impl Strategy<Value = Sku> {
    let id = id.map_or_else(|| sku_ids().boxed(), fixed);
    let name = name.map_or_else(|| display_names().boxed(), fixed);
    let owned_codes = owned_codes.map_or_else(|| codes().boxed(), fixed);
    let associated_codes = associated_codes.map_or_else(|| codes().boxed(), fixed);
    let props = props.map_or_else(|| prop_values().boxed(), fixed);
    (id, name, owned_codes, associated_codes, props).prop_map(
        |(id, name, owned_codes, associated_codes, props)| {
            Sku::new(id, name, owned_codes, associated_codes, props)
        },
    )
}

/// Random batches; pass `Some(..)` to pin a field. The outer `Option` pins,
/// the inner one is the (optional) weak sku reference itself.
pub fn batches(
    id: Option<BatchId>,
    sku_id: Option<Option<SkuId>>,
    name: Option<String>,
    owned_codes: Option<Vec<String>>,
    associated_codes: Option<Vec<String>>,
    props: Option<PropValue>,
) -> impl Strategy<Value = Batch> {
    let id = id.map_or_else(|| batch_ids().boxed(), fixed);
    let sku_id = sku_id.map_or_else(|| prop::option::of(sku_ids()).boxed(), fixed);
    let name = name.map_or_else(|| display_names().boxed(), fixed);
    let owned_codes = owned_codes.map_or_else(|| codes().boxed(), fixed);
    let associated_codes = associated_codes.map_or_else(|| codes().boxed(), fixed);
    let props = props.map_or_else(|| prop_values().boxed(), fixed);
    (id, sku_id, name, owned_codes, associated_codes, props).prop_map(
        |(id, sku_id, name, owned_codes, associated_codes, props)| {
            Batch::new(id, sku_id, name, owned_codes, associated_codes, props)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::Entity;

    proptest! {
        #[test]
        fn generated_ids_are_canonical(bin in bins(None, None)) {
            prop_assert!(bin.id().is_canonical());
        }

        #[test]
        fn overrides_pin_the_field(
            bin in bins(Some(BinId::from_serial(42)), None),
        ) {
            prop_assert_eq!(bin.id().as_str(), "BIN000042");
        }

        #[test]
        fn generated_codes_stay_ordered_and_short(
            sku in skus(None, None, None, None, None),
        ) {
            prop_assert!(sku.owned_codes().len() < 4);
            prop_assert!(sku.owned_codes().iter().all(|code| code.len() <= 8));
        }
    }
}
