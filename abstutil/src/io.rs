use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serializes an object to pretty-printed JSON. Panics if the object can't be represented,
/// which would be a bug in its `Serialize` impl, not a runtime condition.
pub fn to_json<T: Serialize>(obj: &T) -> String {
    serde_json::to_string_pretty(obj).unwrap()
}

pub fn from_json<T: DeserializeOwned>(raw: &str) -> Result<T> {
    serde_json::from_str(raw).map_err(|err| anyhow!(err))
}

pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let raw = fs_err::read_to_string(path)?;
    let obj = from_json(&raw).with_context(|| format!("parsing {}", path))?;
    Ok(obj)
}

/// Writes an object as JSON, creating any missing parent directories.
pub fn write_json<T: Serialize>(path: &str, obj: &T) -> Result<()> {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs_err::create_dir_all(parent)?;
        }
    }
    fs_err::write(path, to_json(obj))?;
    info!("Wrote {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Knob {
        name: String,
        value: f64,
    }

    #[test]
    fn json_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("abstutil_io_{}", std::process::id()));
        let path = dir.join("nested").join("knob.json");
        let path = path.to_str().unwrap();

        let knob = Knob {
            name: "fov".to_string(),
            value: 75.0,
        };
        write_json(path, &knob).unwrap();
        let loaded: Knob = read_json(path).unwrap();
        assert_eq!(knob, loaded);

        fs_err::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_mentions_path() {
        let err = read_json::<Knob>("/definitely/not/here.json").unwrap_err();
        assert!(format!("{:#}", err).contains("/definitely/not/here.json"));
    }

    #[test]
    fn bad_json_mentions_path() {
        let dir = std::env::temp_dir().join(format!("abstutil_bad_{}", std::process::id()));
        fs_err::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        fs_err::write(&path, "{ not json").unwrap();
        let path = path.to_str().unwrap();

        let err = read_json::<Knob>(path).unwrap_err();
        assert!(format!("{:#}", err).contains("bad.json"));

        fs_err::remove_dir_all(&dir).unwrap();
    }
}
