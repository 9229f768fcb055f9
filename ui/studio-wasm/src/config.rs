//! Site configuration.
//!
//! Defaults come from [`InteractionConfig`]; a page can override any subset
//! with `<script type="application/json" id="site-config">`.

use crate::dom;
use nas_interaction::InteractionConfig;
use std::sync::LazyLock;

pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub static CONFIG: LazyLock<InteractionConfig> = LazyLock::new(|| {
    let raw = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    InteractionConfig::from_overrides(raw.as_deref())
});
