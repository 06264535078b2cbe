//! カウンターアニメーション
//!
//! 表示値を 0 から目標値まで 900ms かけて ease-out cubic で進める。
//! クロックを持たない純粋なサンプラーとして実装し、呼び出し側が
//! フレーム時刻から計算した経過時間を渡す。テストでは偽の時刻を
//! 与えて決定的に検証できる。

/// アニメーション時間（ミリ秒）
pub const COUNTER_DURATION_MS: f64 = 900.0;

/// ease-out cubic: 序盤が速く、終盤で減速する
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// 1フィールド分のカウンターアニメーション
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CounterAnimation {
    target: f64,
    decimals: usize,
    duration_ms: f64,
}

/// 1フレーム分の表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

impl CounterAnimation {
    pub fn new(target: f64, decimals: usize) -> Self {
        Self {
            target,
            decimals,
            duration_ms: COUNTER_DURATION_MS,
        }
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// 経過時間に対する表示テキストを返す
    ///
    /// 経過が duration に達したら、イージング計算の浮動小数点ずれを
    /// 避けるため目標値そのものを指定桁数でフォーマットして返す。
    pub fn sample(&self, elapsed_ms: f64) -> CounterFrame {
        let progress = (elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        if progress >= 1.0 {
            return CounterFrame {
                text: format!("{:.*}", self.decimals, self.target),
                done: true,
            };
        }
        let value = self.target * ease_out_cubic(progress);
        CounterFrame {
            text: format!("{:.*}", self.decimals, value),
            done: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn test_ease_out_cubic_front_loaded() {
        // 前半で半分以上進む
        assert!(ease_out_cubic(0.5) > 0.5);
        assert!(ease_out_cubic(0.25) > 0.25);
    }

    #[test]
    fn test_sample_starts_at_zero() {
        let anim = CounterAnimation::new(42.0, 0);
        let frame = anim.sample(0.0);
        assert_eq!(frame.text, "0");
        assert!(!frame.done);
    }

    #[test]
    fn test_sample_final_value_is_exact_target() {
        let anim = CounterAnimation::new(42.0, 0);
        let frame = anim.sample(COUNTER_DURATION_MS);
        assert_eq!(frame.text, "42");
        assert!(frame.done);
    }

    #[test]
    fn test_sample_final_value_with_decimals() {
        let anim = CounterAnimation::new(150.5, 1);
        let frame = anim.sample(COUNTER_DURATION_MS + 16.7);
        assert_eq!(frame.text, "150.5");
        assert!(frame.done);
    }

    #[test]
    fn test_sample_is_monotonic_for_positive_target() {
        let anim = CounterAnimation::new(87.0, 2);
        let mut last = -1.0f64;
        for step in 0..=30 {
            let elapsed = step as f64 * 30.0;
            let value: f64 = anim.sample(elapsed).text.parse().expect("数値のはず");
            assert!(value >= last, "elapsed={}で減少した", elapsed);
            last = value;
        }
    }

    #[test]
    fn test_sample_never_overshoots() {
        let anim = CounterAnimation::new(87.0, 2);
        for step in 0..=40 {
            let value: f64 = anim.sample(step as f64 * 30.0).text.parse().unwrap();
            assert!(value <= 87.0);
        }
    }

    #[test]
    fn test_restart_converges_to_same_target() {
        // 再レンダリングで最初からやり直しても終着値は同じ
        let first = CounterAnimation::new(30.0, 0).sample(1200.0);
        let second = CounterAnimation::new(30.0, 0).sample(5000.0);
        assert_eq!(first.text, second.text);
        assert_eq!(first.text, "30");
    }

    #[test]
    fn test_negative_elapsed_clamps_to_start() {
        let anim = CounterAnimation::new(10.0, 0);
        let frame = anim.sample(-50.0);
        assert_eq!(frame.text, "0");
        assert!(!frame.done);
    }
}
