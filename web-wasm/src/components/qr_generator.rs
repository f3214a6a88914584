//! 作成パネル
//!
//! テキストからQRコードを作成し、PNG/SVGの保存と読み取りタブでの検証を行う。

use leptos::prelude::*;
use qr_studio_common::{
    encode_data_url, encode_svg, to_data_url, translate, EcLevel, GenerateOptions, HexColor,
    Language, TextKey,
};

/// 作成済みのコード
#[derive(Clone, PartialEq)]
struct Generated {
    png_url: String,
    svg_url: String,
}

/// 入力値からオプションを組み立てて作成
fn generate(
    text: &str,
    ec_level: EcLevel,
    size: u32,
    margin: u32,
    dark: &str,
    light: &str,
) -> qr_studio_common::Result<Generated> {
    let opts = GenerateOptions {
        size,
        margin,
        ec_level,
        dark: dark.parse::<HexColor>()?,
        light: light.parse::<HexColor>()?,
    };
    let png_url = encode_data_url(text, &opts)?;
    let svg = encode_svg(text, &opts)?;
    Ok(Generated {
        png_url,
        svg_url: to_data_url("image/svg+xml", svg.as_bytes()),
    })
}

#[component]
pub fn QrGenerator<F>(
    #[prop(into)] lang: Signal<Language>,
    on_verify: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    let t = move |key: TextKey| translate(lang.get(), key);
    let defaults = GenerateOptions::default();

    let (text, set_text) = signal(String::new());
    let (ec_level, set_ec_level) = signal(defaults.ec_level);
    let (size, set_size) = signal(defaults.size);
    let (margin, set_margin) = signal(defaults.margin);
    let (dark, set_dark) = signal(defaults.dark.to_hex());
    let (light, set_light) = signal(defaults.light.to_hex());
    let (generated, set_generated) = signal(None::<Generated>);
    let (error, set_error) = signal(None::<TextKey>);

    let on_generate = move |_| {
        let input = text.get_untracked();
        if input.trim().is_empty() {
            set_generated.set(None);
            set_error.set(Some(TextKey::EmptyInput));
            return;
        }
        let result = generate(
            &input,
            ec_level.get_untracked(),
            size.get_untracked(),
            margin.get_untracked(),
            &dark.get_untracked(),
            &light.get_untracked(),
        );
        match result {
            Ok(code) => {
                set_error.set(None);
                set_generated.set(Some(code));
            }
            Err(e) => {
                gloo::console::warn!("generate failed:", e.to_string());
                set_generated.set(None);
                set_error.set(Some(TextKey::GenerateFailed));
            }
        }
    };

    let on_verify_click = move |_| {
        if let Some(code) = generated.get_untracked() {
            on_verify(code.png_url);
        }
    };

    view! {
        <div class="generator">
            <div class="settings-grid">
                <div class="form-group form-group-wide">
                    <label for="qr-text">{move || t(TextKey::InputLabel)}</label>
                    <textarea
                        id="qr-text"
                        rows="3"
                        placeholder=move || t(TextKey::InputPlaceholder)
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="qr-ec">{move || t(TextKey::ErrorCorrection)}</label>
                    <select
                        id="qr-ec"
                        on:change=move |ev| {
                            if let Ok(level) = event_target_value(&ev).parse::<EcLevel>() {
                                set_ec_level.set(level);
                            }
                        }
                    >
                        {EcLevel::ALL
                            .into_iter()
                            .map(|level| {
                                view! {
                                    <option
                                        value=level.as_str()
                                        selected=move || ec_level.get() == level
                                    >
                                        {level.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="qr-size">{move || t(TextKey::Size)}</label>
                    <input
                        type="number"
                        id="qr-size"
                        min="64"
                        max=GenerateOptions::MAX_SIZE.to_string()
                        step="32"
                        prop:value=move || size.get().to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(defaults.size);
                            set_size.set(value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="qr-margin">{move || t(TextKey::Margin)}</label>
                    <input
                        type="number"
                        id="qr-margin"
                        min="0"
                        max=GenerateOptions::MAX_MARGIN.to_string()
                        prop:value=move || margin.get().to_string()
                        on:change=move |ev| {
                            let value = event_target_value(&ev).parse().unwrap_or(defaults.margin);
                            set_margin.set(value);
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="qr-dark">{move || t(TextKey::DarkColor)}</label>
                    <input
                        type="color"
                        id="qr-dark"
                        prop:value=move || dark.get()
                        on:input=move |ev| set_dark.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="qr-light">{move || t(TextKey::LightColor)}</label>
                    <input
                        type="color"
                        id="qr-light"
                        prop:value=move || light.get()
                        on:input=move |ev| set_light.set(event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="export-buttons">
                <button class="btn btn-primary" on:click=on_generate>
                    {move || t(TextKey::Generate)}
                </button>
            </div>

            <p class="status text-error">
                {move || error.get().map(t)}
            </p>

            <Show when=move || generated.get().is_some()>
                <div class="generated">
                    <img
                        class="preview"
                        src=move || generated.get().map(|g| g.png_url).unwrap_or_default()
                        alt="QR code"
                    />
                    <div class="export-buttons">
                        <a
                            class="btn btn-secondary"
                            download="qrcode.png"
                            href=move || generated.get().map(|g| g.png_url).unwrap_or_default()
                        >
                            {move || t(TextKey::DownloadPng)}
                        </a>
                        <a
                            class="btn btn-secondary"
                            download="qrcode.svg"
                            href=move || generated.get().map(|g| g.svg_url).unwrap_or_default()
                        >
                            {move || t(TextKey::DownloadSvg)}
                        </a>
                        <button
                            class="btn btn-primary"
                            on:click={
                                let on_verify_click = on_verify_click.clone();
                                move |ev| on_verify_click(ev)
                            }
                        >
                            {move || t(TextKey::Verify)}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
