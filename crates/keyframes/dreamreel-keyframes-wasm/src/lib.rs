use js_sys::{Float64Array, JSON};
use serde::Serialize;
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use dreamreel_keyframes_core::{bake, load_keyframes_json, BakingConfig, Config, Interpolator};

/// Keyframe sampler handed to the browser rendering loop.
#[wasm_bindgen]
pub struct DreamreelKeyframes {
    core: Interpolator,
    row: Vec<f64>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

/// Maps become plain JS objects rather than `Map` instances.
fn to_js<T: Serialize>(value: &T, what: &str) -> Result<JsValue, JsError> {
    value
        .serialize(&swb::Serializer::json_compatible())
        .map_err(|e| JsError::new(&format!("{what} error: {e}")))
}

#[wasm_bindgen]
impl DreamreelKeyframes {
    /// Build from an array of keyframe objects. Pass a config object or
    /// undefined/null for defaults.
    /// Example:
    ///   new DreamreelKeyframes([{ timestamp: 0, x: 0 }, { timestamp: 1, x: 1 }], { order: "sort" })
    #[wasm_bindgen(constructor)]
    pub fn new(keyframes: JsValue, config: JsValue) -> Result<DreamreelKeyframes, JsError> {
        console_error_panic_hook::set_once();

        let cfg: Config = if jsvalue_is_undefined_or_null(&config) {
            Config::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };

        if jsvalue_is_undefined_or_null(&keyframes) {
            return Err(JsError::new("keyframes: value is null/undefined"));
        }
        // Stringify so the core loader reports keyframe index and field on errors.
        let s = JSON::stringify(&keyframes)
            .map_err(|e| JsError::new(&format!("keyframes stringify error: {:?}", e)))?
            .as_string()
            .ok_or_else(|| JsError::new("keyframes: stringify produced non-string"))?;
        let core = load_keyframes_json(&s, &cfg)
            .map_err(|e| JsError::new(&format!("keyframes error: {e}")))?;

        let row = Vec::with_capacity(core.field_count());
        Ok(DreamreelKeyframes { core, row })
    }

    /// Sample every field at `t`. Returns `{ [field]: number }`.
    #[wasm_bindgen]
    pub fn sample(&self, t: f64) -> Result<JsValue, JsError> {
        to_js(&self.core.sample(t), "sample")
    }

    /// Write samples into `out` in `fields()` order without allocating a JS object.
    #[wasm_bindgen(js_name = sample_into)]
    pub fn sample_into(&mut self, t: f64, out: &Float64Array) -> Result<(), JsError> {
        self.core.sample_into(t, &mut self.row);
        if out.length() as usize != self.row.len() {
            return Err(JsError::new(&format!(
                "sample_into: expected Float64Array of length {}, got {}",
                self.row.len(),
                out.length()
            )));
        }
        out.copy_from(&self.row);
        Ok(())
    }

    /// Per-field rate of change at `t`.
    #[wasm_bindgen]
    pub fn velocity(&self, t: f64) -> Result<JsValue, JsError> {
        to_js(&self.core.velocity(t), "velocity")
    }

    /// Field names in output order.
    #[wasm_bindgen]
    pub fn fields(&self) -> Result<JsValue, JsError> {
        let names: Vec<&str> = self.core.field_names().collect();
        to_js(&names, "fields")
    }

    #[wasm_bindgen]
    pub fn start(&self) -> f64 {
        self.core.start()
    }

    #[wasm_bindgen]
    pub fn end(&self) -> f64 {
        self.core.end()
    }

    /// Pre-sample at a fixed rate. `cfg` is optional JSON matching BakingConfig.
    #[wasm_bindgen]
    pub fn bake(&self, cfg: JsValue) -> Result<JsValue, JsError> {
        let cfg: BakingConfig = if jsvalue_is_undefined_or_null(&cfg) {
            BakingConfig::default()
        } else {
            swb::from_value(cfg).map_err(|e| JsError::new(&format!("baking cfg error: {e}")))?
        };
        to_js(&bake(&self.core, &cfg), "bake")
    }
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
