// 序列化格式：成功 => null；失败 => {"kind": 目录名或 null, "msg": 文本}
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{catalog, error::Error};

#[derive(Serialize)]
struct WireOut<'a> {
    kind: Option<&'a str>,
    msg: &'a str,
}

#[derive(Deserialize)]
struct WireIn {
    #[serde(default)]
    kind: Option<String>,
    msg: String,
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_empty() {
            return serializer.serialize_none();
        }
        let wire = WireOut {
            kind: self.as_static().and_then(catalog::name_of),
            msg: self.msg_str(),
        };
        serializer.serialize_some(&wire)
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Some(wire) = Option::<WireIn>::deserialize(deserializer)? else {
            return Ok(Error::NONE);
        };
        if let Some(kind) = wire.kind.as_deref().and_then(catalog::lookup) {
            return Ok(Error::from_static(kind));
        }
        if let Some(name) = wire.kind.as_deref() {
            tracing::debug!(kind = name, "unknown static error kind; keeping message only");
        }
        Ok(Error::from(wire.msg))
    }
}
