//! Shared generators.

use super::common::make_record;
use onelink_search::{Region, ServiceRecord};
use proptest::prelude::*;

/// Latin or Arabic word, lowercase, no variant letters.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,8}|[ابتثجحخدذرزسشصضطظعغفقكلمنهوي]{3,6}").unwrap()
}

/// One to three words.
pub fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..4).prop_map(|words| words.join(" "))
}

/// Anything a user might paste: case, punctuation, harakat, alef forms.
pub fn messy_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 .,!?_\\-ابتسشنهويأإآٱىةَُِّْ\u{0640}éü]{0,24}").unwrap()
}

pub fn region_strategy() -> impl Strategy<Value = Region> {
    prop::sample::select(Region::ALL.to_vec())
}

pub fn category_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["unified", "justice", "tax", "travel"]).prop_map(str::to_string)
}

pub fn catalog_strategy() -> impl Strategy<Value = Vec<ServiceRecord>> {
    prop::collection::vec((name_strategy(), region_strategy(), category_strategy()), 1..16).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (name, region, category))| make_record(&format!("r{}", i), &name, region, &category))
            .collect()
    })
}
