// src/builder/normalize.rs

//! 原始 JSON 值到显示文本的转换。
//!
//! 数据源把“缺失”和“假值”混用：`null`、`false`、`0`、空字符串都表示没有数据，
//! 因此这里按真值性判断，而不是只检查字段是否存在。

use serde_json::{Number, Value};

pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// 非字符串值转为显示文本：整数值的浮点数不带小数部分，复合值输出紧凑 JSON
pub fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// 按 JavaScript `Number#toString` 的规则输出：[1e-6, 1e21) 内不用指数形式，
/// 其余使用 `1e+21` 这样的指数形式
fn number_text(n: &Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    let abs = f.abs();
    if abs == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", f);
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// 值为真时取其显示文本，否则使用默认值
pub fn text_or(value: Option<&Value>, default: &str) -> String {
    value
        .filter(|v| is_truthy(v))
        .map(display_text)
        .unwrap_or_else(|| default.to_string())
}
