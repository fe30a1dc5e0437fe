mod app;
mod components;
mod storage;

use taskpad_core::AppConfig;

const CONFIG_TOML: &str =
  include_str!("../assets/taskpad.toml");

fn main() {
  console_error_panic_hook::set_once();

  let config =
    AppConfig::parse_or_default(
      CONFIG_TOML
    );
  init_tracing(&config);

  tracing::info!(
    key = %config.storage.key,
    "starting Taskpad frontend"
  );

  let Some(mount) = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
  else {
    tracing::error!(
      "missing #app mount element"
    );
    return;
  };

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config
    }
  )
  .render();
}

fn init_tracing(config: &AppConfig) {
  let layer_config =
    wasm_tracing::WasmLayerConfig::new()
      .set_max_level(
        config.logging.max_level()
      )
      .to_owned();

  if let Err(err) =
    wasm_tracing::set_as_global_default_with_config(
      layer_config
    )
  {
    gloo::console::warn!(format!(
      "tracing subscriber already set: {err}"
    ));
  }
}
