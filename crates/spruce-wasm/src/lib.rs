use spruce_core::materials::MaterialPreset;
use spruce_core::random::RngSource;
use spruce_core::render::{present, BufferChannel, InstanceBuffers};
use spruce_core::{MorphEngine, MorphSignal, MorphState, OrnamentClass, SceneConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

#[wasm_bindgen]
pub struct SpruceWorld {
    engine: MorphEngine,
    buffers: InstanceBuffers,
    signal: MorphSignal,
    time: f32,
}

#[wasm_bindgen]
impl SpruceWorld {
    /// Generate the scene. The tree starts scattered and assembles on the
    /// first frames, since the requested state defaults to the tree shape.
    #[wasm_bindgen(constructor)]
    pub fn new(foliage_count: usize, ornament_count: usize) -> Result<SpruceWorld, JsValue> {
        let config = SceneConfig::with_counts(foliage_count, ornament_count);
        let engine = MorphEngine::generate(config, &mut RngSource::from_entropy())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let buffers = InstanceBuffers::for_engine(&engine);

        log::info!(
            "WASM SpruceWorld created: {} foliage, {} ornaments",
            foliage_count,
            ornament_count
        );

        let mut world = SpruceWorld {
            engine,
            buffers,
            signal: MorphSignal::new(MorphState::TreeShape),
            time: 0.0,
        };
        present(&world.engine, &mut world.buffers);
        Ok(world)
    }

    /// Advance one frame and refresh the instance buffers.
    /// Returns the time spent in milliseconds.
    #[wasm_bindgen]
    pub fn step(&mut self, dt: f32) -> f32 {
        let start = js_sys::Date::now();
        if dt.is_finite() && dt > 0.0 {
            self.time += dt;
        }
        self.engine.tick_signal(dt, self.time, &self.signal);
        present(&self.engine, &mut self.buffers);
        (js_sys::Date::now() - start) as f32
    }

    /// Flip between tree and scattered. Returns true if now a tree.
    #[wasm_bindgen]
    pub fn toggle(&mut self) -> bool {
        self.signal.toggle() == MorphState::TreeShape
    }

    #[wasm_bindgen]
    pub fn set_tree_shape(&mut self, tree: bool) {
        self.signal.set(if tree {
            MorphState::TreeShape
        } else {
            MorphState::Scattered
        });
    }

    #[wasm_bindgen]
    pub fn is_tree_shape(&self) -> bool {
        self.signal.snapshot() == MorphState::TreeShape
    }

    /// Text for the toggle button.
    #[wasm_bindgen]
    pub fn action_label(&self) -> String {
        self.signal.snapshot().action_label().to_string()
    }

    #[wasm_bindgen]
    pub fn is_settled(&self) -> bool {
        self.engine.is_settled()
    }

    #[wasm_bindgen]
    pub fn shared_progress(&self) -> f32 {
        self.engine.shared_progress()
    }

    #[wasm_bindgen]
    pub fn ornament_progress(&self, id: u32) -> Option<f32> {
        self.engine.try_progress(id)
    }

    #[wasm_bindgen]
    pub fn foliage_count(&self) -> usize {
        self.buffers.foliage().len()
    }

    /// Float view of the foliage buffer: 8 floats per particle
    /// (position xyz, alpha, color rgb, size).
    #[wasm_bindgen]
    pub fn get_foliage_buffer_ptr(&self) -> *const f32 {
        let floats: &[f32] = bytemuck::cast_slice(self.buffers.foliage());
        floats.as_ptr()
    }

    #[wasm_bindgen]
    pub fn get_foliage_buffer_byte_length(&self) -> usize {
        self.buffers.foliage_bytes().len()
    }

    /// `class`: 0 heavy, 1 medium, 2 light. Anything else is an error.
    #[wasm_bindgen]
    pub fn instance_count(&self, class: u8) -> Result<usize, JsValue> {
        Ok(self.buffers.ornaments(class_arg(class)?).len())
    }

    /// Float view of one class's instances: 20 floats each
    /// (column-major 4x4 transform, color rgb, padding).
    #[wasm_bindgen]
    pub fn get_instance_buffer_ptr(&self, class: u8) -> Result<*const f32, JsValue> {
        let floats: &[f32] = bytemuck::cast_slice(self.buffers.ornaments(class_arg(class)?));
        Ok(floats.as_ptr())
    }

    #[wasm_bindgen]
    pub fn get_instance_buffer_byte_length(&self, class: u8) -> Result<usize, JsValue> {
        Ok(self.buffers.ornament_bytes(class_arg(class)?).len())
    }

    /// Whether a buffer needs re-uploading; clears the flag.
    /// `channel`: 0 foliage, 1-3 ornament classes.
    #[wasm_bindgen]
    pub fn take_dirty(&mut self, channel: u8) -> Result<bool, JsValue> {
        let channel = BufferChannel::from_index(channel)
            .ok_or_else(|| JsValue::from_str(&format!("unknown buffer channel {}", channel)))?;
        Ok(self.buffers.take_dirty(channel))
    }

    /// `#RRGGBB` color of ornament `id`, or `undefined` for an unknown id.
    #[wasm_bindgen]
    pub fn ornament_color_hex(&self, id: u32) -> Option<String> {
        self.engine.ornaments().get(id).map(|r| r.swatch.hex())
    }

    /// Material of one class as
    /// `[mesh, roughness, metalness, env_map_intensity, emissive_intensity, tone_mapped]`,
    /// mesh 0 box, 1 sphere, 2 octahedron.
    #[wasm_bindgen]
    pub fn material(&self, class: u8) -> Result<Vec<f32>, JsValue> {
        let preset = MaterialPreset::for_class(class_arg(class)?);
        Ok(vec![
            preset.mesh as u8 as f32,
            preset.roughness,
            preset.metalness,
            preset.env_map_intensity,
            preset.emissive_intensity,
            if preset.tone_mapped { 1.0 } else { 0.0 },
        ])
    }
}

fn class_arg(class: u8) -> Result<OrnamentClass, JsValue> {
    OrnamentClass::from_index(class)
        .ok_or_else(|| JsValue::from_str(&format!("unknown ornament class {}", class)))
}
