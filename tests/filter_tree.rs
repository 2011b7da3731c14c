use screener::{and, col, or, FilterNode, LogicalOperator, Query, ScreenerError};
use serde_json::json;

#[test]
fn nested_or_stays_one_level_down() {
    let p = col("close").gt(10);
    let inner = or([col("volume").gt(1000), col("volume").empty()]).unwrap();
    let tree = and([FilterNode::from(p), inner]).unwrap();

    assert_eq!(tree.operator(), Some(LogicalOperator::And));
    assert_eq!(tree.operands().len(), 2, "OR must not be flattened into the AND");
    assert!(!tree.operands()[0].is_connective());
    assert!(tree.operands()[1].is_connective());
    assert_eq!(tree.depth(), 3);

    let json = serde_json::to_value(&tree).unwrap();
    assert_eq!(
        json,
        json!({
            "operation": {
                "operator": "and",
                "operands": [
                    {"expression": {"left": "close", "operation": "greater", "right": 10}},
                    {"operation": {
                        "operator": "or",
                        "operands": [
                            {"expression": {"left": "volume", "operation": "greater", "right": 1000}},
                            {"expression": {"left": "volume", "operation": "empty"}}
                        ]
                    }}
                ]
            }
        })
    );
}

#[test]
fn and_of_and_is_not_normalized() {
    let inner = and([col("a").eq(1), col("b").eq(2)]).unwrap();
    let outer = and([inner.clone(), col("c").eq(3).into()]).unwrap();
    assert_eq!(outer.operands().len(), 2);
    assert_eq!(outer.operands()[0], inner);
}

#[test]
fn empty_connective_is_rejected() {
    let err = and(Vec::<FilterNode>::new()).unwrap_err();
    assert!(matches!(err, ScreenerError::EmptyConnective("and")));
    assert!(or(Vec::<FilterNode>::new()).is_err());
}

#[test]
fn where2_sends_wrapped_connective() {
    let mut q = Query::new();
    q.where2(and([col("a").eq(1).into(), or([col("b").eq(2)]).unwrap()]).unwrap());
    let json: serde_json::Value = serde_json::from_str(&q.to_json().unwrap()).unwrap();
    let body = &json["filter2"]["operation"];
    assert_eq!(body["operator"], "and");
    assert_eq!(body["operands"].as_array().unwrap().len(), 2);
    assert_eq!(body["operands"][0]["expression"]["left"], "a");
    assert_eq!(body["operands"][1]["operation"]["operator"], "or");
    assert_eq!(body["operands"][1]["operation"]["operands"][0]["expression"]["right"], 2);
    assert!(json["filter2"].get("operator").is_none());
}

#[test]
fn where2_last_call_wins() {
    let mut q = Query::new();
    q.where2(and([col("a").eq(1)]).unwrap());
    q.where2(or([col("b").eq(2)]).unwrap());
    assert_eq!(q.filter_tree().unwrap().operator(), Some(LogicalOperator::Or));
}

#[test]
fn where2_wraps_bare_predicate() {
    let mut q = Query::new();
    q.where2(col("close").lt(5));
    assert!(q.filter_tree().unwrap().is_connective());
    let json: serde_json::Value = serde_json::from_str(&q.to_json().unwrap()).unwrap();
    assert_eq!(
        json["filter2"],
        json!({"operation": {
            "operator": "and",
            "operands": [{"expression": {"left": "close", "operation": "less", "right": 5}}]
        }})
    );
}

#[test]
fn flat_and_tree_filters_are_both_sent() {
    let mut q = Query::new();
    q.where_([col("close").gt(1)]);
    q.where2(and([col("volume").gt(2)]).unwrap());
    let doc = q.compile();
    assert_eq!(doc.filter.len(), 1);
    assert!(doc.filter2.is_some());
    let json = serde_json::to_value(&doc).unwrap();
    assert!(json.get("filter").is_some());
    assert!(json.get("filter2").is_some());
}
