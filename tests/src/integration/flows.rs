//! # Integration Test Flows
//!
//! Drives the full pipeline the way an embedding application would:
//!
//! 1. **Source -> Service**: transactions load through `TransactionSource`
//! 2. **Service -> Queries**: search, associations and bundle mining
//! 3. **Handler**: JSON requests in, JSON-serializable responses out

#[cfg(test)]
mod tests {
    use crate::fixtures::{grocery_transactions, synthetic_transactions};
    use basket_graph::algorithms::{build_graph, itemsets};
    use basket_graph::domain::invariants::{
        invariant_depth_bound, invariant_no_self_loops, invariant_symmetric_adjacency,
        invariant_unique_visits,
    };
    use basket_graph::{
        AnalysisConfig, AnalysisError, BasketAnalysisApi, BasketAnalysisService, GraphStats,
        InMemoryTransactionSource, QueryHandler, QueryResult, TraversalStrategy,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn grocery_service() -> BasketAnalysisService {
        let source = InMemoryTransactionSource::new(grocery_transactions());
        BasketAnalysisService::load(&source, AnalysisConfig::default()).unwrap()
    }

    fn path(visited: &[basket_graph::VisitedItem]) -> Vec<(&str, usize)> {
        visited.iter().map(|v| (v.item.as_str(), v.depth)).collect()
    }

    // =============================================================================
    // SOURCE -> SERVICE
    // =============================================================================

    #[test]
    fn test_grocery_graph_shape() {
        let service = grocery_service();

        assert_eq!(
            service.stats(),
            GraphStats {
                vertex_count: 8,
                edge_count: 7,
                isolated_count: 1,
                total_weight: 14,
            }
        );
        assert_eq!(service.graph().edge_weight("milk", "bread"), Some(4));
        assert_eq!(service.graph().edge_weight("eggs", "bacon"), Some(2));
        assert!(invariant_symmetric_adjacency(service.graph()));
        assert!(invariant_no_self_loops(service.graph()));
    }

    // =============================================================================
    // SERVICE -> QUERIES
    // =============================================================================

    #[test]
    fn test_what_is_bought_with_bread() {
        let service = grocery_service();
        let partners: Vec<(String, u64)> = service
            .items_bought_with("bread", 1, None)
            .unwrap()
            .into_iter()
            .map(|a| (a.item.to_string(), a.weight))
            .collect();

        assert_eq!(
            partners,
            vec![
                ("milk".to_string(), 4),
                ("butter".to_string(), 3),
                ("eggs".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_bfs_and_dfs_from_butter() {
        let service = grocery_service();

        let bfs = service
            .neighbors_within("butter", 2, TraversalStrategy::BreadthFirst)
            .unwrap();
        assert_eq!(
            path(&bfs.visited),
            vec![("butter", 0), ("bread", 1), ("milk", 1), ("eggs", 2)]
        );

        let dfs = service
            .neighbors_within("butter", 3, TraversalStrategy::DepthFirst)
            .unwrap();
        assert_eq!(
            path(&dfs.visited),
            vec![("butter", 0), ("bread", 1), ("milk", 2), ("eggs", 3)]
        );
    }

    #[test]
    fn test_isolated_item() {
        let service = grocery_service();

        let traversal = service
            .neighbors_within("caviar", 3, TraversalStrategy::BreadthFirst)
            .unwrap();
        assert_eq!(path(&traversal.visited), vec![("caviar", 0)]);
        assert!(service.items_bought_with("caviar", 1, None).unwrap().is_empty());
    }

    #[test]
    fn test_top_bundles() {
        let service = grocery_service();

        let pairs: Vec<(String, u64)> = service
            .top_bundles(2, 3)
            .unwrap()
            .into_iter()
            .map(|b| (b.bundle.to_string(), b.frequency))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("{bread, milk}".to_string(), 4),
                ("{bread, butter}".to_string(), 3),
                ("{bacon, eggs}".to_string(), 2),
            ]
        );

        let triples: Vec<(String, u64)> = service
            .top_bundles(3, 5)
            .unwrap()
            .into_iter()
            .map(|b| (b.bundle.to_string(), b.frequency))
            .collect();
        assert_eq!(
            triples,
            vec![
                ("{bread, butter, milk}".to_string(), 2),
                ("{bread, eggs, milk}".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_unknown_item() {
        let service = grocery_service();
        assert!(matches!(
            service.neighbors_within("truffle", 1, TraversalStrategy::DepthFirst),
            Err(AnalysisError::NotFound(_))
        ));
    }

    // =============================================================================
    // HANDLER
    // =============================================================================

    #[test]
    fn test_json_query_roundtrip() {
        let handler = QueryHandler::new(grocery_service());

        let response = handler
            .handle_json(r#"{"query": "top_bundles", "size": 2, "k": 1}"#);
        assert!(response.success);
        assert_eq!(response.metrics.result_count, 1);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["result"]["kind"], "bundles");
        assert_eq!(json["result"]["data"][0]["bundle"][0], "bread");
        assert_eq!(json["result"]["data"][0]["bundle"][1], "milk");
        assert_eq!(json["result"]["data"][0]["frequency"], 4);
    }

    #[test]
    fn test_json_query_failure() {
        let handler = QueryHandler::new(grocery_service());

        let response = handler.handle_json(
            r#"{"query": "neighbors_within", "item": "truffle", "depth": 2}"#,
        );
        assert!(!response.success);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json["error"].as_str().unwrap().contains("truffle"));
    }

    #[test]
    fn test_frequent_pairs_query() {
        let handler = QueryHandler::new(grocery_service());
        let response = handler.handle_json(r#"{"query": "frequent_pairs", "min_frequency": 2}"#);

        match response.result {
            Some(QueryResult::Bundles(bundles)) => {
                let freqs: Vec<u64> = bundles.iter().map(|b| b.frequency).collect();
                assert_eq!(freqs, vec![4, 3, 2, 2]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // =============================================================================
    // SYNTHETIC DATA
    // =============================================================================

    #[test]
    fn test_synthetic_pair_paths_agree() {
        let transactions = synthetic_transactions(500, 40, 8, 42);
        let graph = build_graph(&transactions);

        assert_eq!(
            itemsets::top_pair_bundles(&graph, 25).unwrap(),
            itemsets::top_bundles(&transactions, 2, 25).unwrap()
        );
    }

    #[test]
    fn test_synthetic_traversals_bounded() {
        let transactions = synthetic_transactions(300, 60, 5, 9);
        let service =
            BasketAnalysisService::from_transactions(transactions, AnalysisConfig::default())
                .unwrap();

        for strategy in [TraversalStrategy::BreadthFirst, TraversalStrategy::DepthFirst] {
            let traversal = service.neighbors_within("item-0000", 3, strategy).unwrap();
            assert!(invariant_depth_bound(&traversal.visited, 3));
            assert!(invariant_unique_visits(&traversal.visited));
        }
    }
}
