use serde::de::DeserializeOwned;

/// Reads application-specific `extras` off a glTF object. Missing extras
/// yield the default; malformed extras are logged and ignored.
pub fn parse_extras<T>(owner: &str, extras: &gltf::json::Extras) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = extras else {
        return T::default();
    };

    match serde_json::from_str(raw.get()) {
        Ok(parsed) => parsed,
        Err(err) => {
            log::warn!("Ignoring malformed extras on {}: {}", owner, err);
            T::default()
        }
    }
}
