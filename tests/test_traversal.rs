#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet, VecDeque};

    use anyhow::Result;
    use rand::{rngs::SmallRng, Rng, SeedableRng};
    use sparse_csr::graphs::{bfs, bfs_with_depth, build_csr, induced_edges, ExternalId};

    #[test]
    fn test_bfs_triangle() -> Result<()> {
        let graph = build_csr("1 2\n2 3\n1 3\n")?;
        assert_eq!(bfs(&graph, 1, 1), vec![1, 2, 3]);
        assert_eq!(bfs(&graph, 2, 5), vec![2, 3]);
        assert_eq!(bfs(&graph, 3, 5), vec![3]);
        Ok(())
    }

    #[test]
    fn test_depth_zero_returns_only_start() -> Result<()> {
        let graph = build_csr("1 2\n2 3\n3 1\n")?;
        for node in [1, 2, 3] {
            assert_eq!(bfs(&graph, node, 0), vec![node]);
        }
        Ok(())
    }

    #[test]
    fn test_unknown_start_is_empty() -> Result<()> {
        let graph = build_csr("1 2\n")?;
        assert!(bfs(&graph, 99, 3).is_empty());
        assert!(bfs_with_depth(&graph, -1, 0).is_empty());

        let empty = build_csr("")?;
        assert!(bfs(&empty, 0, 10).is_empty());
        Ok(())
    }

    #[test]
    fn test_depth_bound_on_chain() -> Result<()> {
        let graph = build_csr("0 1\n1 2\n2 3\n3 4\n")?;
        assert_eq!(bfs(&graph, 0, 2), vec![0, 1, 2]);
        assert_eq!(bfs_with_depth(&graph, 0, 3), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(bfs(&graph, 0, 100), vec![0, 1, 2, 3, 4]);
        Ok(())
    }

    #[test]
    fn test_cycle_visits_each_node_once() -> Result<()> {
        let graph = build_csr("0 1\n1 2\n2 3\n3 4\n4 0\n")?;
        let visited = bfs(&graph, 2, 50);
        assert_eq!(visited, vec![2, 3, 4, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_expansion_follows_internal_order() -> Result<()> {
        // internal ids: 10 -> 0, 30 -> 1, 20 -> 2, 40 -> 3
        let graph = build_csr("10 30\n20 40\n10 20\n")?;
        assert_eq!(bfs_with_depth(&graph, 10, 2), vec![(10, 0), (30, 1), (20, 1), (40, 2)]);
        Ok(())
    }

    #[test]
    fn test_edges_are_directed() -> Result<()> {
        let graph = build_csr("1 2\n3 2\n")?;
        assert_eq!(bfs(&graph, 2, 10), vec![2]);
        assert_eq!(bfs(&graph, 3, 10), vec![3, 2]);
        Ok(())
    }

    #[test]
    fn test_induced_edges_of_bfs_ball() -> Result<()> {
        let graph = build_csr("0 1\n0 2\n1 3\n2 4\n1 2\n3 0\n")?;
        let ball = bfs(&graph, 0, 1);
        assert_eq!(ball, vec![0, 1, 2]);
        assert_eq!(induced_edges(&graph, &ball), vec![(0, 1), (0, 2), (1, 2)]);

        // repeated and unknown ids are ignored
        assert_eq!(induced_edges(&graph, &[3, 99, 0, 3]), vec![(3, 0)]);
        assert!(induced_edges(&graph, &[]).is_empty());
        Ok(())
    }

    /// Shortest hop distances by plain BFS over an adjacency map.
    fn reference_distances(
        edges: &[(ExternalId, ExternalId)],
        start: ExternalId,
    ) -> HashMap<ExternalId, usize> {
        let mut adjacency: HashMap<ExternalId, Vec<ExternalId>> = HashMap::new();
        for &(u, v) in edges {
            adjacency.entry(u).or_default().push(v);
        }
        let mut distances = HashMap::from([(start, 0)]);
        let mut queue = VecDeque::from([start]);
        while let Some(node) = queue.pop_front() {
            let d = distances[&node];
            for &succ in adjacency.get(&node).into_iter().flatten() {
                if !distances.contains_key(&succ) {
                    distances.insert(succ, d + 1);
                    queue.push_back(succ);
                }
            }
        }
        distances
    }

    #[test]
    fn test_random_graphs_against_reference() -> Result<()> {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..30 {
            let num_ids: usize = rng.random_range(1..40);
            let ids: Vec<ExternalId> = (0..num_ids)
                .map(|_| rng.random_range(0..1_000_000_000))
                .collect();
            let num_edges: usize = rng.random_range(0..120);
            let edges: Vec<(ExternalId, ExternalId)> = (0..num_edges)
                .map(|_| {
                    (
                        ids[rng.random_range(0..ids.len())],
                        ids[rng.random_range(0..ids.len())],
                    )
                })
                .collect();
            let text: String = edges.iter().map(|(u, v)| format!("{} {}\n", u, v)).collect();
            let graph = build_csr(&text)?;
            let Some(&(start, _)) = edges.first() else {
                continue;
            };
            let max_depth = rng.random_range(0..6);

            let visited = bfs_with_depth(&graph, start, max_depth);
            assert_eq!(visited[0], (start, 0));
            assert!(visited.len() <= graph.num_nodes());

            let distinct: HashSet<ExternalId> = visited.iter().map(|&(id, _)| id).collect();
            assert_eq!(distinct.len(), visited.len());

            let expected = reference_distances(&edges, start);
            let reachable = expected.values().filter(|&&d| d <= max_depth).count();
            assert_eq!(visited.len(), reachable);
            for &(id, depth) in visited.iter() {
                assert_eq!(expected[&id], depth, "node {}", id);
            }
            assert!(visited.windows(2).all(|w| w[0].1 <= w[1].1));
        }
        Ok(())
    }
}
