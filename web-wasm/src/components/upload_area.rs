//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとファイルピッカーの両方を受け付ける。
//! 宣言MIMEタイプが image/* でないものは黙って無視する。

use leptos::prelude::*;
use traffic_ai_common::SelectedImage;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F>(preview: Memo<Option<String>>, on_file: F) -> impl IntoView
where
    F: Fn(SelectedImage) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_file = on_file.clone();
        move |file: File| {
            // 非画像は選択段階で弾く（エラー表示もしない）
            if !SelectedImage::is_image_mime(&file.type_()) {
                return;
            }
            read_file(file, on_file.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let open_picker = {
        let handle_file = handle_file.clone();
        move || {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let input_for_change = input.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(file) = input_for_change.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let on_zone_click = {
        let open_picker = open_picker.clone();
        move |_| {
            // プレビュー表示中はゾーンクリックでは開かない（変更ボタンで開く）
            if preview.get().is_none() {
                open_picker();
            }
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-zone"];
                if is_dragover.get() {
                    classes.push("drag-over");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_zone_click
        >
            <Show
                when=move || preview.get().is_some()
                fallback=|| view! {
                    <div class="upload-icon">"📷"</div>
                    <p>"交差点の画像をドラッグ&ドロップ または クリックして選択"</p>
                    <p class="text-muted">"対応形式: JPEG, PNG, WebP"</p>
                }
            >
                <div class="preview-wrapper">
                    <img class="preview" src=move || preview.get().unwrap_or_default() />
                    <button
                        class="btn btn-secondary change-btn"
                        on:click={
                            let open_picker = open_picker.clone();
                            move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                open_picker();
                            }
                        }
                    >
                        "画像を変更"
                    </button>
                </div>
            </Show>
        </div>
    }
}

fn read_file<F>(file: File, on_file: F)
where
    F: Fn(SelectedImage) + 'static,
{
    let file_name = file.name();
    let mime_type = file.type_();
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_file(SelectedImage {
                    file_name: file_name.clone(),
                    mime_type: mime_type.clone(),
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
