use upsat::{
    config::Config,
    context::{NodeOrder, UpwardPlanarity},
    structures::graph::Digraph,
};

mod small {

    use super::*;

    #[test]
    fn single_edge() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let e = g.add_edge(u, v);

        let mut engine = UpwardPlanarity::default();
        assert_eq!(engine.embed_upward_planar(&mut g, None), Ok(true));

        assert_eq!(g.rotation(u), &[e]);
        assert_eq!(g.rotation(v), &[e]);

        let outer = engine.outer_face().unwrap();
        assert_eq!(outer.node, u);
        assert_eq!(outer.edge, e);
    }

    #[test]
    fn path_interior_rotation() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        let w = g.add_node();
        let uv = g.add_edge(u, v);
        let vw = g.add_edge(v, w);

        let mut engine = UpwardPlanarity::default();
        let mut order = NodeOrder::default();
        assert_eq!(engine.embed_upward_planar(&mut g, Some(&mut order)), Ok(true));

        // Outgoing edges precede incoming ones in a rotation.
        assert_eq!(g.rotation(v), &[vw, uv]);
        assert_eq!(order[u], 0);
        assert_eq!(order[v], 1);
        assert_eq!(order[w], 2);
    }

    #[test]
    fn star_rotation_shape() {
        let mut g = Digraph::new();
        let c = g.add_node();
        let below: Vec<_> = (0..2).map(|_| g.add_node()).collect();
        let above: Vec<_> = (0..2).map(|_| g.add_node()).collect();
        let incoming: Vec<_> = below.iter().map(|&p| g.add_edge(p, c)).collect();
        let outgoing: Vec<_> = above.iter().map(|&q| g.add_edge(c, q)).collect();

        let mut engine = UpwardPlanarity::default();
        assert_eq!(engine.embed_upward_planar(&mut g, None), Ok(true));

        let rotation = g.rotation(c);
        let position = |edge| rotation.iter().position(|&e| e == edge).unwrap();
        for &out in &outgoing {
            for &inc in &incoming {
                assert!(position(out) < position(inc));
            }
        }
    }
}

mod diamond {

    use super::*;

    struct Diamond {
        graph: Digraph,
        s: upsat::structures::graph::NodeId,
        a: upsat::structures::graph::NodeId,
        b: upsat::structures::graph::NodeId,
        t: upsat::structures::graph::NodeId,
        edges: [upsat::structures::graph::EdgeId; 4],
    }

    fn diamond() -> Diamond {
        let mut graph = Digraph::new();
        let s = graph.add_node();
        let a = graph.add_node();
        let b = graph.add_node();
        let t = graph.add_node();
        let sa = graph.add_edge(s, a);
        let at = graph.add_edge(a, t);
        let sb = graph.add_edge(s, b);
        let bt = graph.add_edge(b, t);
        Diamond {
            graph,
            s,
            a,
            b,
            t,
            edges: [sa, at, sb, bt],
        }
    }

    #[test]
    fn canonical_embedding() {
        let Diamond {
            mut graph,
            s,
            a,
            b,
            t,
            edges: [sa, at, sb, bt],
        } = diamond();

        let mut engine = UpwardPlanarity::default();
        let mut order = NodeOrder::default();
        assert_eq!(engine.embed_upward_planar(&mut graph, Some(&mut order)), Ok(true));

        assert_eq!(order[s], 0);
        assert_eq!(order[t], 3);

        // Fixing pins the mirror pair down to the member whose rotation at
        // the lowest node leads with the smaller edge, so the path through a
        // sits left of the path through b.
        assert_eq!(graph.rotation(s), &[sa, sb]);
        assert_eq!(graph.rotation(t), &[bt, at]);
        assert_eq!(graph.rotation(a), &[at, sa]);
        assert_eq!(graph.rotation(b), &[bt, sb]);

        let outer = engine.outer_face().unwrap();
        assert_eq!(outer.node, s);
        assert_eq!(outer.edge, sa);
    }

    #[test]
    fn repeat_embeds_agree() {
        let first = {
            let Diamond { mut graph, s, a, b, t, .. } = diamond();
            let mut engine = UpwardPlanarity::default();
            assert_eq!(engine.embed_upward_planar(&mut graph, None), Ok(true));
            [s, a, b, t].map(|n| graph.rotation(n).to_vec())
        };

        let second = {
            let Diamond { mut graph, s, a, b, t, .. } = diamond();
            let mut engine = UpwardPlanarity::default();
            assert_eq!(engine.embed_upward_planar(&mut graph, None), Ok(true));
            [s, a, b, t].map(|n| graph.rotation(n).to_vec())
        };

        assert_eq!(first, second);
    }

    #[test]
    fn embedding_survives_a_retest() {
        let Diamond { mut graph, .. } = diamond();

        let mut engine = UpwardPlanarity::default();
        assert_eq!(engine.embed_upward_planar(&mut graph, None), Ok(true));
        assert_eq!(engine.test_upward_planarity(&graph, None), Ok(true));
    }

    #[test]
    fn without_fixing() {
        let Diamond { mut graph, s, .. } = diamond();

        let config = Config {
            fix_embedding: false,
            ..Config::default()
        };
        let mut engine = UpwardPlanarity::new(config);
        assert_eq!(engine.embed_upward_planar(&mut graph, None), Ok(true));

        // Whichever member of the mirror pair came back, it is an embedding
        // with the outer face at the lowest node.
        assert_eq!(engine.outer_face().unwrap().node, s);
        assert_eq!(graph.rotation(s).len(), 2);
    }
}

mod infeasible {

    use super::*;

    #[test]
    fn rejected_graph_is_untouched() {
        let mut g = Digraph::new();
        let nodes: Vec<_> = (0..5).map(|_| g.add_node()).collect();
        for i in 0..5 {
            for j in (i + 1)..5 {
                g.add_edge(nodes[i], nodes[j]);
            }
        }
        let before: Vec<_> = nodes.iter().map(|&n| g.rotation(n).to_vec()).collect();

        let mut engine = UpwardPlanarity::default();
        assert_eq!(engine.embed_upward_planar(&mut g, None), Ok(false));

        let after: Vec<_> = nodes.iter().map(|&n| g.rotation(n).to_vec()).collect();
        assert_eq!(before, after);
        assert_eq!(engine.outer_face(), None);
    }

    #[test]
    fn cyclic_graph() {
        let mut g = Digraph::new();
        let u = g.add_node();
        let v = g.add_node();
        g.add_edge(u, v);
        g.add_edge(v, u);

        let mut engine = UpwardPlanarity::default();
        assert_eq!(engine.embed_upward_planar(&mut g, None), Ok(false));
        assert_eq!(engine.outer_face(), None);
    }
}
