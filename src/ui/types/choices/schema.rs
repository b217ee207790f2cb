use anyhow::{Context, Result, bail};
use schemars::Schema;
use serde_json::{Map, Value};

/// One numeric prompt derived from a `params` struct's schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Numeric fields of the `params` object for the variant tagged `kind_key`,
/// in declaration order. Non-numeric fields are skipped.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;

    let alts = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(|v| v.as_array())
        .context("missing oneOf/anyOf")?;

    for branch in alts {
        let bobj = branch.as_object().context("branch is not object")?;
        let Some(props) = bobj.get("properties").and_then(|v| v.as_object()) else {
            continue;
        };

        if !discriminant_matches(props, kind_key) {
            continue;
        }

        let Some(params_obj) = props
            .get("params")
            .and_then(|v| v.as_object())
            .and_then(|o| resolve_ref_obj(root_obj, o))
        else {
            return Ok(vec![]);
        };

        let Some(params_props) = params_obj.get("properties").and_then(|v| v.as_object()) else {
            return Ok(vec![]);
        };

        let mut out = Vec::new();
        for (name, field_schema) in params_props {
            let fs_obj = field_schema
                .as_object()
                .and_then(|o| resolve_ref_obj(root_obj, o))
                .with_context(|| format!("failed to resolve schema for '{name}'"))?;

            if !is_number(fs_obj.get("type")) {
                continue;
            }

            out.push(FieldSpec {
                name: name.clone(),
                title: fs_obj
                    .get("title")
                    .and_then(|v| v.as_str())
                    .unwrap_or(name)
                    .to_string(),
                description: fs_obj
                    .get("description")
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
                default: fs_obj.get("default").cloned(),
                min: fs_obj.get("minimum").and_then(|v| v.as_f64()),
                max: fs_obj.get("maximum").and_then(|v| v.as_f64()),
            });
        }

        return Ok(out);
    }

    bail!("no branch found for type={kind_key}");
}

fn discriminant_matches(props: &Map<String, Value>, kind_key: &str) -> bool {
    let Some(tobj) = props.get("type").and_then(|v| v.as_object()) else {
        return false;
    };

    if tobj.get("const").and_then(|v| v.as_str()) == Some(kind_key) {
        return true;
    }
    matches!(
        tobj.get("enum").and_then(|v| v.as_array()).map(Vec::as_slice),
        Some([only]) if only.as_str() == Some(kind_key)
    )
}

/// Resolve a local $ref like "#/$defs/SensorReadings" against the root object.
fn resolve_ref_obj<'a>(
    root_obj: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    match obj.get("$ref") {
        Some(Value::String(r)) => {
            let path = r.strip_prefix("#/")?;
            let mut cur: &Map<String, Value> = root_obj;
            for raw_seg in path.split('/') {
                // JSON Pointer unescape (~1 => /, ~0 => ~)
                let seg = raw_seg.replace("~1", "/").replace("~0", "~");
                cur = cur.get(&seg)?.as_object()?;
            }
            Some(cur)
        }
        _ => Some(obj),
    }
}

fn is_number(ty: Option<&Value>) -> bool {
    match ty {
        Some(Value::String(s)) => s == "number",
        // unions like ["null","number"] for Option<f64>
        Some(Value::Array(arr)) => arr.iter().any(|v| v.as_str() == Some("number")),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema_from(v: Value) -> Schema {
        Schema::try_from(v).unwrap()
    }

    #[test]
    fn resolves_params_ref_and_keeps_numbers_only() {
        let root = schema_from(json!({
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "type": {"type": "string", "const": "measure"},
                        "params": {"$ref": "#/$defs/Measure"}
                    }
                },
                {
                    "type": "object",
                    "properties": {
                        "type": {"type": "string", "enum": ["noop"]},
                        "params": {"type": "object", "properties": {}}
                    }
                }
            ],
            "$defs": {
                "Measure": {
                    "type": "object",
                    "properties": {
                        "temp": {"type": "number", "title": "Temperature", "default": 1.5,
                                 "minimum": 0.0},
                        "label": {"type": "string"},
                        "bypass": {"type": ["number", "null"], "description": "optional"}
                    }
                }
            }
        }));

        let specs = specs_for_kind(&root, "measure").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["temp", "bypass"]);
        assert_eq!(specs[0].title, "Temperature");
        assert_eq!(specs[0].default, Some(json!(1.5)));
        assert_eq!(specs[0].min, Some(0.0));
        assert_eq!(specs[1].title, "bypass");
        assert_eq!(specs[1].description.as_deref(), Some("optional"));

        assert!(specs_for_kind(&root, "noop").unwrap().is_empty());
        assert!(specs_for_kind(&root, "missing").is_err());
    }
}
