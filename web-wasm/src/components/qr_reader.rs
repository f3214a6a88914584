//! 読み取りパネル
//!
//! 画像アップロード（クリック/ドラッグ&ドロップ）とカメラからQRコードを読み取る。
//! 作成パネルから渡された検証画像（initial_image）は変わるたびに読み取る。

use gloo::timers::callback::Interval;
use js_sys::{Object, Reflect};
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use qr_studio_common::{decode_data_url, decode_rgba, translate, Decoded, Language, TextKey};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, DragEvent, File, FileList, FileReader, HtmlInputElement,
    MediaStream, MediaStreamConstraints, MediaStreamTrack,
};

/// カメラフレームの読み取り間隔
const SCAN_INTERVAL_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ReaderStatus {
    Idle,
    Found,
    NotFound,
    LoadFailed,
    Scanning,
    CameraUnavailable,
}

impl ReaderStatus {
    fn text_key(&self) -> Option<TextKey> {
        match self {
            ReaderStatus::Idle | ReaderStatus::Found => None,
            ReaderStatus::NotFound => Some(TextKey::NoQrFound),
            ReaderStatus::LoadFailed => Some(TextKey::ImageLoadFailed),
            ReaderStatus::Scanning => Some(TextKey::Scanning),
            ReaderStatus::CameraUnavailable => Some(TextKey::CameraUnavailable),
        }
    }
}

/// 結果の出どころ（作成パネルからの検証画像ならラベルを出す）
fn source_label(from_generator: bool) -> Option<TextKey> {
    from_generator.then_some(TextKey::VerifyingImage)
}

/// 起動中のカメラ。破棄されるとトラックを止める。
struct CameraSession {
    stream: MediaStream,
    _interval: Interval,
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        stop_stream(&self.stream);
    }
}

/// getUserMedia 完了後にセッションを保持する
///
/// 待っている間に停止された、またはパネルが破棄された場合は
/// セッションをその場で破棄して `false` を返す。
/// 先に保持されていたセッションは置き換え時に破棄される。
fn install_session<T: 'static>(
    camera_on: ReadSignal<bool>,
    slot: StoredValue<Option<T>, LocalStorage>,
    session: T,
) -> bool {
    if camera_on.try_get_untracked() != Some(true) {
        drop(session);
        return false;
    }
    match slot.try_set_value(Some(session)) {
        None => true,
        Some(returned) => {
            drop(returned);
            false
        }
    }
}

fn stop_stream(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// 背面カメラ優先の映像制約
fn camera_constraints() -> MediaStreamConstraints {
    let video = Object::new();
    let _ = Reflect::set(&video, &"facingMode".into(), &"environment".into());
    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&video);
    constraints.set_audio(&JsValue::FALSE);
    constraints
}

async fn open_camera() -> Result<MediaStream, JsValue> {
    let media = window().navigator().media_devices()?;
    let promise = media.get_user_media_with_constraints(&camera_constraints())?;
    let stream = JsFuture::from(promise).await?;
    stream.dyn_into::<MediaStream>()
}

#[component]
pub fn QrReader(
    #[prop(into)] lang: Signal<Language>,
    #[prop(into)] initial_image: Signal<Option<String>>,
) -> impl IntoView {
    let t = move |key: TextKey| translate(lang.get(), key);

    let (preview, set_preview) = signal(None::<String>);
    let (results, set_results) = signal(Vec::<Decoded>::new());
    let (status, set_status) = signal(ReaderStatus::Idle);
    let (is_dragover, set_is_dragover) = signal(false);
    let (camera_on, set_camera_on) = signal(false);
    let (copied, set_copied) = signal(None::<usize>);
    let (from_generator, set_from_generator) = signal(false);

    let file_input = NodeRef::<html::Input>::new();
    let video_ref = NodeRef::<html::Video>::new();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let camera = StoredValue::new_local(None::<CameraSession>);

    let show_results = move |codes: Vec<Decoded>| {
        set_copied.set(None);
        set_status.set(if codes.is_empty() {
            ReaderStatus::NotFound
        } else {
            ReaderStatus::Found
        });
        set_results.set(codes);
    };

    let decode_url = move |url: String| {
        match decode_data_url(&url) {
            Ok(codes) => show_results(codes),
            Err(e) => {
                gloo::console::warn!("decode failed:", e.to_string());
                set_results.set(Vec::new());
                set_status.set(ReaderStatus::LoadFailed);
            }
        }
        set_preview.set(Some(url));
    };

    // 検証画像が渡されたら読み取る
    Effect::new(move |_| {
        if let Some(url) = initial_image.get() {
            set_camera_on.set(false);
            set_from_generator.set(true);
            decode_url(url);
        }
    });

    let read_file = move |file: File| {
        let Ok(reader) = FileReader::new() else {
            set_status.set(ReaderStatus::LoadFailed);
            return;
        };
        let reader_clone = reader.clone();
        let on_load = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
            match reader_clone.result().ok().and_then(|r| r.as_string()) {
                Some(data_url) => decode_url(data_url),
                None => set_status.set(ReaderStatus::LoadFailed),
            }
        }) as Box<dyn FnMut(_)>);
        reader.set_onload(Some(on_load.as_ref().unchecked_ref()));
        on_load.forget();

        if reader.read_as_data_url(&file).is_err() {
            set_status.set(ReaderStatus::LoadFailed);
        }
    };

    let handle_files = move |files: FileList| {
        // 複数選択時は先頭の1枚だけ読む
        if let Some(file) = files.get(0) {
            set_camera_on.set(false);
            set_from_generator.set(false);
            read_file(file);
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            handle_files(files);
        }
        // 同じファイルを再選択しても change が発火するように
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            handle_files(files);
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| set_is_dragover.set(false);

    let on_upload_click = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    // カメラの1フレームを読み取る。見つかったらカメラを止める。
    let scan_frame = move || {
        let (Some(video), Some(canvas)) = (video_ref.get_untracked(), canvas_ref.get_untracked()) else {
            return;
        };
        // HAVE_CURRENT_DATA 未満はまだ描画できない
        if video.ready_state() < 2 {
            return;
        }
        let (width, height) = (video.video_width(), video.video_height());
        if width == 0 || height == 0 {
            return;
        }
        canvas.set_width(width);
        canvas.set_height(height);

        let Some(ctx) = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            return;
        };
        if ctx.draw_image_with_html_video_element(&video, 0.0, 0.0).is_err() {
            return;
        }
        let Ok(frame) = ctx.get_image_data(0.0, 0.0, width as f64, height as f64) else {
            return;
        };

        match decode_rgba(width, height, &frame.data()) {
            Ok(codes) if !codes.is_empty() => {
                set_preview.set(canvas.to_data_url().ok());
                show_results(codes);
                set_camera_on.set(false);
            }
            Ok(_) => {}
            Err(e) => gloo::console::warn!("frame decode failed:", e.to_string()),
        }
    };

    let stop_camera = move || {
        camera.try_update_value(|session| drop(session.take()));
        if let Some(video) = video_ref.get_untracked() {
            video.set_src_object(None);
        }
    };

    // カメラの起動/停止は camera_on に追従させる
    // （Interval のコールバック内で自分自身を破棄しないため）
    Effect::new(move |_| {
        if !camera_on.get() {
            stop_camera();
            return;
        }
        set_status.set(ReaderStatus::Scanning);
        set_results.set(Vec::new());
        set_preview.set(None);
        set_from_generator.set(false);

        // await の後はパネルが破棄されている可能性があるので try_* を使う
        spawn_local(async move {
            let stream = match open_camera().await {
                Ok(stream) => stream,
                Err(e) => {
                    gloo::console::warn!("camera unavailable:", e);
                    set_camera_on.try_set(false);
                    set_status.try_set(ReaderStatus::CameraUnavailable);
                    return;
                }
            };
            let session = CameraSession {
                _interval: Interval::new(SCAN_INTERVAL_MS, scan_frame),
                stream,
            };
            if !install_session(camera_on, camera, session) {
                return;
            }
            let video = video_ref.get_untracked();
            let attached = camera.with_value(|s| match (s, video) {
                (Some(session), Some(video)) => {
                    video.set_src_object(Some(&session.stream));
                    let _ = video.play();
                    true
                }
                _ => false,
            });
            if !attached {
                gloo::console::warn!("camera preview element missing");
            }
        });
    });

    // リセット（再マウント）時にカメラを解放
    on_cleanup(move || {
        camera.try_update_value(|session| drop(session.take()));
    });

    let copy_result = move |index: usize, text: String| {
        let promise = window().navigator().clipboard().write_text(&text);
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => set_copied.set(Some(index)),
                Err(e) => gloo::console::warn!("clipboard write failed:", e),
            }
        });
    };

    view! {
        <div class="reader">
            <input
                type="file"
                accept="image/*"
                class="hidden"
                node_ref=file_input
                on:change=on_file_change
            />
            <div
                class=move || {
                    let mut classes = vec!["upload-area"];
                    if is_dragover.get() {
                        classes.push("dragover");
                    }
                    classes.join(" ")
                }
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_upload_click
            >
                <div class="upload-icon">"📷"</div>
                <p>{move || t(TextKey::UploadPrompt)}</p>
                <p class="text-muted">{move || t(TextKey::UploadHint)}</p>
            </div>

            <div class="camera-controls">
                <button
                    class="btn btn-secondary"
                    on:click=move |_| set_camera_on.update(|on| *on = !*on)
                >
                    {move || if camera_on.get() { t(TextKey::StopCamera) } else { t(TextKey::StartCamera) }}
                </button>
            </div>

            <div class=move || if camera_on.get() { "camera block" } else { "camera hidden" }>
                <video node_ref=video_ref autoplay=true playsinline=true muted=true></video>
                <canvas node_ref=canvas_ref class="hidden"></canvas>
            </div>

            <Show when=move || preview.get().is_some()>
                <img class="preview" src=move || preview.get().unwrap_or_default() alt="preview" />
            </Show>

            <p class="status text-muted">
                {move || status.get().text_key().map(t)}
            </p>

            <Show when=move || from_generator.get() && !results.get().is_empty()>
                <p class="source-label">{move || source_label(from_generator.get()).map(t)}</p>
            </Show>

            <Show when=move || !results.get().is_empty()>
                <div class="results">
                    <h3>{move || t(TextKey::DecodedResult)}</h3>
                    <For
                        each=move || results.get().into_iter().enumerate()
                        key=|(i, code)| (*i, code.content.clone())
                        children=move |(i, code)| {
                            let content = code.content.clone();
                            view! {
                                <div class="result-item">
                                    <pre class="result-content">{code.content.clone()}</pre>
                                    <p class="result-meta text-muted">
                                        {format!("v{} / EC {}", code.version, code.ec_level)}
                                    </p>
                                    <button
                                        class="btn btn-small btn-tertiary"
                                        on:click=move |_| copy_result(i, content.clone())
                                    >
                                        {move || {
                                            if copied.get() == Some(i) {
                                                t(TextKey::Copied)
                                            } else {
                                                t(TextKey::Copy)
                                            }
                                        }}
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
