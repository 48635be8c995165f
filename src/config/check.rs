use serde_yaml::Value;

/// Top-level sections and their keys, as written by `Config::init`.
const KNOWN_KEYS: &[(&str, &[&str])] = &[
    (
        "layout",
        &[
            "width",
            "height",
            "margin",
            "label_width",
            "grid_top",
            "row_height",
            "title_size",
            "text_size",
            "label_size",
            "wrap_width",
        ],
    ),
    (
        "palette",
        &[
            "driving",
            "on_duty",
            "off_duty",
            "outline",
            "grid",
            "text",
            "background",
        ],
    ),
    ("font", &[]),
    ("bold_font", &[]),
];

/// List keys absent from a config file (they fall back to defaults), as
/// dotted paths such as `palette.driving`.
pub fn missing_keys(yaml: &str) -> Result<Vec<String>, serde_yaml::Error> {
    let root: Value = serde_yaml::from_str(yaml)?;
    let mut missing = Vec::new();

    for (section, keys) in KNOWN_KEYS {
        match root.get(section) {
            None => missing.push(section.to_string()),
            Some(value) => {
                for key in keys.iter() {
                    if value.get(key).is_none() {
                        missing.push(format!("{section}.{key}"));
                    }
                }
            }
        }
    }

    Ok(missing)
}
