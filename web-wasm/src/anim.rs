//! フレーム駆動のアニメーションドライバ
//!
//! requestAnimationFrame を await できる Future に包み、カウンターを
//! 1本の非同期タスクとして進める。進行度の計算そのものは
//! traffic_ai_common::CounterAnimation（純粋・クロックなし）に任せる。

use futures::channel::oneshot;
use leptos::prelude::*;
use traffic_ai_common::CounterAnimation;
use wasm_bindgen::prelude::*;

/// 次の再描画フレームまで待ち、フレーム時刻（ms）を返す
pub async fn next_frame() -> f64 {
    let (tx, rx) = oneshot::channel();
    let callback = Closure::once_into_js(move |timestamp: f64| {
        let _ = tx.send(timestamp);
    });
    web_sys::window()
        .unwrap()
        .request_animation_frame(callback.unchecked_ref())
        .unwrap();
    rx.await.unwrap_or(0.0)
}

/// カウンターを0から目標値までアニメーションさせる
///
/// 最終フレームは目標値そのものをフォーマットした文字列になる
pub async fn animate_counter(set_text: WriteSignal<String>, target: f64, decimals: usize) {
    let anim = CounterAnimation::new(target, decimals);
    let start = next_frame().await;
    loop {
        let frame = anim.sample(next_frame().await - start);
        let done = frame.done;
        set_text.set(frame.text);
        if done {
            break;
        }
    }
}

/// エネルギーバーの幅を目標値へ進める
///
/// CSSトランジションを確実に発火させるため、一度0%へ戻してから
/// 次のフレームで目標値を入れる
pub async fn animate_bar_width(set_width: WriteSignal<u32>, percent: u32) {
    next_frame().await;
    set_width.set(0);
    next_frame().await;
    set_width.set(percent);
}
