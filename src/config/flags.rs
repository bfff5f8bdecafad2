// Appends `--name=value` when the value is set and non-empty.
pub(crate) fn push_value<T: ToString>(args: &mut Vec<String>, name: &str, value: Option<T>) {
    if let Some(value) = value {
        let value = value.to_string();
        if !value.is_empty() {
            args.push(format!("--{name}={value}"));
        }
    }
}

// Appends a bare `--name` for every enabled switch, in order.
pub(crate) fn push_switches(args: &mut Vec<String>, switches: &[(&str, bool)]) {
    args.extend(
        switches
            .iter()
            .filter(|(_, on)| *on)
            .map(|(name, _)| format!("--{name}")),
    );
}
