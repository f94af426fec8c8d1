//! Request handling for the line protocol
//!
//! One JSON request per line in, one JSON response per line out:
//!
//! ```text
//! {"id":1,"method":"select_category","params":{"category":"mass"}}
//! {"id":1,"result":{"amount":"100","category":"mass","from":"kg","to":"lb","result":"220.462 Pounds"}}
//! ```

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::{json, Value as JsonValue};
use convtool_core::ErrorReport;
use convtool_units::{self as units, Category, FormatOptions};
use tracing::debug;

use crate::config::Config;
use crate::form::{render, FormState};

#[derive(Debug, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
pub struct Response {
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorReport>,
}

impl Response {
    pub fn ok(id: Option<JsonValue>, result: JsonValue) -> Self {
        Response { id, result: Some(result), error: None }
    }

    pub fn err(id: Option<JsonValue>, error: ErrorReport) -> Self {
        Response { id, result: None, error: Some(error) }
    }
}

#[derive(Debug, Deserialize)]
struct CategoryParams {
    category: String,
}

#[derive(Debug, Deserialize)]
struct AmountParams {
    amount: String,
}

#[derive(Debug, Deserialize)]
struct UnitParams {
    unit: String,
}

#[derive(Debug, Deserialize)]
struct ConvertParams {
    amount: f64,
    category: String,
    from: String,
    to: String,
}

/// Form plus rendered result, returned after every form change
#[derive(Debug, Serialize)]
struct FormView<'a> {
    #[serde(flatten)]
    form: &'a FormState,
    result: Option<String>,
}

/// The single form this shell drives
pub struct Session {
    form: FormState,
    format: FormatOptions,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Session {
            form: FormState::new(config.initial_category),
            format: config.format,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn handle(&mut self, request: Request) -> Response {
        debug!(method = %request.method, "handling request");
        let id = request.id.clone();
        match self.dispatch(&request.method, request.params) {
            Ok(result) => Response::ok(id, result),
            Err(error) => Response::err(id, error),
        }
    }

    fn dispatch(&mut self, method: &str, params: Option<JsonValue>) -> Result<JsonValue, ErrorReport> {
        match method {
            "list_categories" => to_json(&units::list_categories()),
            "list_units" => {
                let p: CategoryParams = parse_params(params)?;
                to_json(&units::list_units(&p.category)?)
            }
            "default_pair" => {
                let p: CategoryParams = parse_params(params)?;
                let (from, to) = units::default_pair(&p.category)?;
                Ok(json!({ "from": from, "to": to }))
            }
            "select_category" => {
                let p: CategoryParams = parse_params(params)?;
                let category: Category = p.category.parse()?;
                self.form.select_category(category);
                self.view()
            }
            "set_amount" => {
                let p: AmountParams = parse_params(params)?;
                self.form.set_amount(&p.amount);
                self.view()
            }
            "set_from" => {
                let p: UnitParams = parse_params(params)?;
                self.form.set_from(&p.unit)?;
                self.view()
            }
            "set_to" => {
                let p: UnitParams = parse_params(params)?;
                self.form.set_to(&p.unit)?;
                self.view()
            }
            "state" => self.view(),
            "convert" => {
                let p: ConvertParams = parse_params(params)?;
                let text = units::convert_and_format_with(
                    &self.format, p.amount, &p.category, &p.from, &p.to,
                )?;
                Ok(json!({ "result": text }))
            }
            other => Err(ErrorReport::bad_request(format!("unknown method: {}", other))
                .with_suggestion("Methods: list_categories, list_units, default_pair, select_category, set_amount, set_from, set_to, state, convert")),
        }
    }

    fn view(&self) -> Result<JsonValue, ErrorReport> {
        to_json(&FormView {
            form: &self.form,
            result: render(&self.form, &self.format),
        })
    }
}

fn parse_params<T: DeserializeOwned>(params: Option<JsonValue>) -> Result<T, ErrorReport> {
    let params = params.unwrap_or_else(|| json!({}));
    serde_json::from_value(params)
        .map_err(|e| ErrorReport::bad_request(format!("invalid params: {}", e)))
}

fn to_json<T: Serialize>(value: &T) -> Result<JsonValue, ErrorReport> {
    serde_json::to_value(value)
        .map_err(|e| ErrorReport::bad_request(format!("could not encode result: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&Config::default())
    }

    fn call(session: &mut Session, line: &str) -> Response {
        let request: Request = serde_json::from_str(line).unwrap();
        session.handle(request)
    }

    #[test]
    fn test_list_categories() {
        let mut s = session();
        let resp = call(&mut s, r#"{"id":1,"method":"list_categories"}"#);
        let result = resp.result.unwrap();
        assert_eq!(result[0]["id"], "distance");
        assert_eq!(result[3]["name"], "Time");
        assert_eq!(resp.id, Some(json!(1)));
    }

    #[test]
    fn test_list_units() {
        let mut s = session();
        let resp = call(&mut s, r#"{"id":2,"method":"list_units","params":{"category":"temperature"}}"#);
        let result = resp.result.unwrap();
        assert_eq!(result.as_array().unwrap().len(), 3);
        assert_eq!(result[2]["name"], "Kelvins");
    }

    #[test]
    fn test_form_flow() {
        let mut s = session();
        let resp = call(&mut s, r#"{"id":1,"method":"state"}"#);
        assert_eq!(resp.result.unwrap()["result"], "100000 Meters");

        let resp = call(&mut s, r#"{"id":2,"method":"select_category","params":{"category":"mass"}}"#);
        let view = resp.result.unwrap();
        assert_eq!(view["from"], "kg");
        assert_eq!(view["to"], "lb");
        assert_eq!(view["result"], "220.462 Pounds");

        let resp = call(&mut s, r#"{"id":3,"method":"set_to","params":{"unit":"g"}}"#);
        assert_eq!(resp.result.unwrap()["result"], "100000 Grams");

        let resp = call(&mut s, r#"{"id":4,"method":"set_amount","params":{"amount":""}}"#);
        assert_eq!(resp.result.unwrap()["result"], JsonValue::Null);
        assert_eq!(s.form().amount, "");
    }

    #[test]
    fn test_convert_one_shot() {
        let mut s = session();
        let resp = call(&mut s, r#"{"method":"convert","params":{"amount":0,"category":"temperature","from":"degC","to":"K"}}"#);
        assert_eq!(resp.result.unwrap()["result"], "273.15 Kelvins");
        // Stateless: the form is untouched
        assert_eq!(s.form().category, Category::Distance);
    }

    #[test]
    fn test_errors_are_reported() {
        let mut s = session();

        let resp = call(&mut s, r#"{"id":1,"method":"set_from","params":{"unit":"kg"}}"#);
        assert_eq!(resp.error.unwrap().code, "UNKNOWN_UNIT");

        let resp = call(&mut s, r#"{"id":2,"method":"list_units","params":{"category":"volume"}}"#);
        assert_eq!(resp.error.unwrap().code, "UNKNOWN_CATEGORY");

        let resp = call(&mut s, r#"{"id":3,"method":"list_units"}"#);
        assert_eq!(resp.error.unwrap().code, "BAD_REQUEST");

        let resp = call(&mut s, r#"{"id":4,"method":"launch"}"#);
        let error = resp.error.unwrap();
        assert_eq!(error.code, "BAD_REQUEST");
        assert!(error.suggestion.is_some());
    }

    #[test]
    fn test_response_serialization() {
        let resp = Response::ok(Some(json!(7)), json!({"result": "1 Meter"}));
        assert_eq!(
            serde_json::to_string(&resp).unwrap(),
            r#"{"id":7,"result":{"result":"1 Meter"}}"#
        );
    }
}
