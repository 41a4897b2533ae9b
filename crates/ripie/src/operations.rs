//! Tool → GraphQL operation table
//!
//! Each tool maps to exactly one fixed operation. The descriptor carries the
//! operation name, the query document and a binding function that pulls the
//! tool's arguments into GraphQL variables.

use serde_json::{json, Map, Value};

use crate::error::ToolError;
use crate::graphql::GraphqlRequest;
use crate::queries;

/// Builds GraphQL variables from tool arguments
pub type BindFn = fn(&Value) -> Result<Value, ToolError>;

/// A fixed remote operation exposed as a tool
pub struct Operation {
    /// Tool name callers use
    pub tool: &'static str,
    /// GraphQL `operationName`
    pub operation_name: &'static str,
    /// GraphQL document
    pub query: &'static str,
    pub bind: BindFn,
}

impl Operation {
    /// Bind `arguments` and build the request for this operation
    pub fn request(&self, arguments: &Value) -> Result<GraphqlRequest, ToolError> {
        Ok(GraphqlRequest {
            operation_name: self.operation_name,
            variables: (self.bind)(arguments)?,
            query: self.query,
        })
    }
}

/// Every tool this server knows about
pub static OPERATIONS: [Operation; 6] = [
    Operation {
        tool: "get_counties_for_filters",
        operation_name: "getCountiesForFilters",
        query: queries::COUNTIES_FOR_FILTERS,
        bind: bind_counties_for_filters,
    },
    Operation {
        tool: "get_towns_for_filters",
        operation_name: "getTownsForFilters",
        query: queries::TOWNS_FOR_FILTERS,
        bind: bind_towns_for_filters,
    },
    Operation {
        tool: "search_death_notices",
        operation_name: "searchDeathNoticesForListTableWithoutPhoto",
        query: queries::SEARCH_DEATH_NOTICES,
        bind: bind_search_death_notices,
    },
    Operation {
        tool: "get_death_notice_fd_info",
        operation_name: "getDeathNoticeFDInfo",
        query: queries::DEATH_NOTICE_FD_INFO,
        bind: bind_death_notice_id,
    },
    Operation {
        tool: "get_counties",
        operation_name: "getCounties",
        query: queries::COUNTIES,
        bind: bind_nothing,
    },
    Operation {
        tool: "get_death_notice_full",
        operation_name: "getDeathNoticeFull",
        query: queries::DEATH_NOTICE_FULL,
        bind: bind_death_notice_id,
    },
];

/// Look up the operation behind a tool name
pub fn find(tool: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.tool == tool)
}

/// Names of all recognized tools
pub fn tool_names() -> impl Iterator<Item = &'static str> {
    OPERATIONS.iter().map(|op| op.tool)
}

// =============================================================================
// Argument extraction
// =============================================================================

fn as_object(arguments: &Value) -> Result<&Map<String, Value>, ToolError> {
    arguments
        .as_object()
        .ok_or_else(|| ToolError::InvalidArguments(json_kind(arguments)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// A key that must be present. An explicit `null` counts as present.
pub fn required(arguments: &Value, key: &'static str) -> Result<Value, ToolError> {
    as_object(arguments)?
        .get(key)
        .cloned()
        .ok_or(ToolError::MissingArgument(key))
}

/// A key that defaults to an empty object when absent
pub fn optional_or_empty(arguments: &Value, key: &str) -> Result<Value, ToolError> {
    Ok(as_object(arguments)?
        .get(key)
        .cloned()
        .unwrap_or_else(|| json!({})))
}

fn bind_counties_for_filters(arguments: &Value) -> Result<Value, ToolError> {
    Ok(json!({ "input": optional_or_empty(arguments, "input")? }))
}

fn bind_towns_for_filters(arguments: &Value) -> Result<Value, ToolError> {
    Ok(json!({
        "countyId": required(arguments, "countyId")?,
        "input": optional_or_empty(arguments, "input")?,
    }))
}

fn bind_search_death_notices(arguments: &Value) -> Result<Value, ToolError> {
    Ok(json!({
        "list": required(arguments, "list")?,
        "isTiledView": required(arguments, "isTiledView")?,
    }))
}

fn bind_death_notice_id(arguments: &Value) -> Result<Value, ToolError> {
    Ok(json!({ "deathNoticeId": required(arguments, "deathNoticeId")? }))
}

// get_counties takes no arguments and ignores whatever it is given
fn bind_nothing(_arguments: &Value) -> Result<Value, ToolError> {
    Ok(json!({}))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_tools() {
        let names: Vec<_> = tool_names().collect();
        assert_eq!(
            names,
            vec![
                "get_counties_for_filters",
                "get_towns_for_filters",
                "search_death_notices",
                "get_death_notice_fd_info",
                "get_counties",
                "get_death_notice_full",
            ]
        );
    }

    #[test]
    fn test_find_unknown() {
        assert!(find("get_weather").is_none());
        assert!(find("").is_none());
        assert!(find("GET_COUNTIES").is_none());
    }

    #[test]
    fn test_each_query_declares_its_operation() {
        for op in &OPERATIONS {
            let header = format!("query {}", op.operation_name);
            assert!(op.query.starts_with(&header), "{} query", op.tool);
        }
    }

    #[test]
    fn test_counties_for_filters_defaults_input() {
        let req = find("get_counties_for_filters").unwrap().request(&json!({})).unwrap();
        assert_eq!(req.operation_name, "getCountiesForFilters");
        assert_eq!(req.variables, json!({"input": {}}));
    }

    #[test]
    fn test_counties_for_filters_passes_input_through() {
        let args = json!({"input": {"search": "Dublin"}});
        let req = find("get_counties_for_filters").unwrap().request(&args).unwrap();
        assert_eq!(req.variables, json!({"input": {"search": "Dublin"}}));
    }

    #[test]
    fn test_towns_for_filters_binds_county_and_input() {
        let args = json!({"countyId": 7, "input": {"search": "Ballina"}, "extra": true});
        let req = find("get_towns_for_filters").unwrap().request(&args).unwrap();
        assert_eq!(
            req.variables,
            json!({"countyId": 7, "input": {"search": "Ballina"}})
        );
    }

    #[test]
    fn test_towns_for_filters_requires_county() {
        let err = find("get_towns_for_filters")
            .unwrap()
            .request(&json!({"input": {}}))
            .unwrap_err();
        assert_eq!(err, ToolError::MissingArgument("countyId"));
    }

    #[test]
    fn test_search_requires_both_keys() {
        let op = find("search_death_notices").unwrap();
        assert_eq!(
            op.request(&json!({"list": {}})).unwrap_err(),
            ToolError::MissingArgument("isTiledView")
        );
        assert_eq!(
            op.request(&json!({"isTiledView": false})).unwrap_err(),
            ToolError::MissingArgument("list")
        );

        let req = op
            .request(&json!({"list": {"page": 1}, "isTiledView": false}))
            .unwrap();
        assert_eq!(req.variables, json!({"list": {"page": 1}, "isTiledView": false}));
    }

    #[test]
    fn test_notice_tools_share_binding() {
        for tool in ["get_death_notice_fd_info", "get_death_notice_full"] {
            let req = find(tool).unwrap().request(&json!({"deathNoticeId": 551234})).unwrap();
            assert_eq!(req.variables, json!({"deathNoticeId": 551234}));
        }
    }

    #[test]
    fn test_explicit_null_counts_as_present() {
        let req = find("get_death_notice_full")
            .unwrap()
            .request(&json!({"deathNoticeId": null}))
            .unwrap();
        assert_eq!(req.variables, json!({"deathNoticeId": null}));
    }

    #[test]
    fn test_get_counties_ignores_arguments() {
        let op = find("get_counties").unwrap();
        assert_eq!(op.request(&json!({"junk": 1})).unwrap().variables, json!({}));
        assert_eq!(op.request(&Value::Null).unwrap().variables, json!({}));
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        let err = find("get_counties_for_filters")
            .unwrap()
            .request(&json!([1, 2]))
            .unwrap_err();
        assert_eq!(err, ToolError::InvalidArguments("array"));
    }
}
