pub fn parse_f64(val_str: Option<&&str>) -> f64 {
    match val_str {
        Some(val) => fast_float::parse::<f64, _>(val.trim()).map_or(f64::NAN, |v| v),
        None => f64::NAN,
    }
}

pub fn parse_string(val_str: Option<&&str>) -> Option<String> {
    match val_str {
        Some(val) if !val.trim().is_empty() => Some(val.trim().to_string()),
        _ => None,
    }
}
