//! Result-screen texts shown after a run.

use serde::Serialize;

/// File name of the feedback configuration inside the resources directory.
pub const FEEDBACK_CONFIG_FILE: &str = "feedback_config.json";

/// Facts shown on the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_blind_population: String,
    pub daily_challenges: String,
    pub accessibility_importance: String,
}

/// All narrative and call-to-action texts for the result screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedbackConfig {
    pub smooth: Vec<String>,
    pub hard: Vec<String>,
    pub failed: Vec<String>,
    pub statistics: Statistics,
    pub action_calls: Vec<String>,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            smooth: strings(&[
                "他稳稳地走过了这条街，就像每天一样。",
                "一切都那么顺利，仿佛这条路走了千百遍。",
                "今天的天气很好，街道也格外友好。",
                "小林的心情不错，步伐也轻快了许多。",
            ]),
            hard: strings(&[
                "他在煎饼摊前绊了一下，但很快就站稳了。",
                "路上的车子有点多，但他还是小心地通过了。",
                "今天的挑战不小，好在都有惊无险。",
                "虽然有些波折，但最终还是安全到达了。",
            ]),
            failed: strings(&[
                "今天的路似乎特别难走，需要更多练习。",
                "也许明天会是更好的一天。",
                "遇到困难是正常的，重要的是不要放弃。",
                "每一次挫折都是成长的机会。",
            ]),
            statistics: Statistics {
                total_blind_population: "中国约有1731万视障人士".to_string(),
                daily_challenges: "每一次出行都是一次挑战".to_string(),
                accessibility_importance: "无障碍设施对视障群体至关重要".to_string(),
            },
            action_calls: strings(&[
                "关注视障群体，共建无障碍社会",
                "了解视障人士的日常生活需求",
                "支持无障碍设施建设",
                "用理解和尊重，让城市更温暖",
            ]),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
