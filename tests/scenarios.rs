use rapc::config::PlacementConfig;
use rapc::domain::cluster_state::ClusterState;
use rapc::domain::component::{Component, ComponentType};
use rapc::domain::executor::Executor;
use rapc::domain::ids::{ComponentId, ExecutorId, NodeId, RackId, TopologyId};
use rapc::domain::node::{Node, WorkerSlot};
use rapc::domain::topology::TopologyDetails;
use rapc::scheduler::{self, result::FailureStatus, result::SchedulingResult};

use std::collections::HashMap;

fn single_component_topology(component_id: &str, component_type: ComponentType, executors: Vec<(&str, f64, f64)>, per_worker_max_heap: f64) -> TopologyDetails {
    let execs: Vec<ExecutorId> = executors.iter().map(|(id, _, _)| ExecutorId::new(*id)).collect();
    let mut exec_map = HashMap::new();
    let mut executor_to_component = HashMap::new();
    for (id, cpu, mem) in &executors {
        let eid = ExecutorId::new(*id);
        exec_map.insert(eid.clone(), Executor::new(eid.clone(), *cpu, *mem));
        executor_to_component.insert(eid, ComponentId::new(component_id));
    }
    let component = Component { id: ComponentId::new(component_id), component_type, execs, parents: vec![], children: vec![] };
    TopologyDetails::new(TopologyId::new("t"), vec![component], exec_map, executor_to_component, per_worker_max_heap)
}

#[test]
fn s1_trivial_single_node() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 10.0, 10.0, [6700]));
    let topography: HashMap<RackId, Vec<String>> = [(RackId::new("R1"), vec!["n1.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    state.set_unassigned_executors(TopologyId::new("t"), vec![ExecutorId::new("execA1")]);

    let topology = single_component_topology("A", ComponentType::Source, vec![("execA1", 1.0, 2.0)], 8.0);
    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");

    match result {
        SchedulingResult::Success { assignment, .. } => {
            assert_eq!(assignment.len(), 1);
            let slot = WorkerSlot::new(NodeId::new("N1"), 6700);
            assert_eq!(assignment.get(&slot).map(|execs| execs.len()), Some(1));
            assert_eq!(assignment.get(&slot).unwrap()[0].id, ExecutorId::new("execA1"));
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn s2_heap_cap_forces_second_slot() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 4.0, 16.0, [6700, 6701]));
    let topography: HashMap<RackId, Vec<String>> = [(RackId::new("R1"), vec!["n1.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    let unassigned = vec![ExecutorId::new("e1"), ExecutorId::new("e2"), ExecutorId::new("e3")];
    state.set_unassigned_executors(TopologyId::new("t"), unassigned);

    let topology = single_component_topology("A", ComponentType::Source, vec![("e1", 0.1, 2.0), ("e2", 0.1, 2.0), ("e3", 0.1, 2.0)], 4.0);
    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");

    match result {
        SchedulingResult::Success { assignment, .. } => {
            let slot_6700 = WorkerSlot::new(NodeId::new("N1"), 6700);
            let slot_6701 = WorkerSlot::new(NodeId::new("N1"), 6701);
            assert_eq!(assignment.get(&slot_6700).map(|e| e.len()), Some(2), "first two executors should fill slot 6700 to the heap cap");
            assert_eq!(assignment.get(&slot_6701).map(|e| e.len()), Some(1), "third executor should overflow to 6701");
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn s3_rack_preference() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 20.0, 20.0, [6700]));
    nodes.insert(NodeId::new("N2"), Node::new(NodeId::new("N2"), "n2.local", Some(RackId::new("R2")), 2.0, 2.0, [6700]));
    let topography: HashMap<RackId, Vec<String>> =
        [(RackId::new("R1"), vec!["n1.local".to_string()]), (RackId::new("R2"), vec!["n2.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    state.set_unassigned_executors(TopologyId::new("t"), vec![ExecutorId::new("e1"), ExecutorId::new("e2")]);

    let topology = single_component_topology("A", ComponentType::Source, vec![("e1", 1.0, 1.0), ("e2", 1.0, 1.0)], 8.0);
    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");

    match result {
        SchedulingResult::Success { assignment, .. } => {
            assert_eq!(assignment.len(), 1, "both executors should land on the same (fattest-rack) node's single slot");
            let slot = assignment.keys().next().unwrap();
            assert_eq!(slot.node_id, NodeId::new("N1"));
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn s4_interleaving_alternates_components() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 10.0, 10.0, [6700]));
    nodes.insert(NodeId::new("N2"), Node::new(NodeId::new("N2"), "n2.local", Some(RackId::new("R1")), 10.0, 10.0, [6700]));
    let topography: HashMap<RackId, Vec<String>> = [(RackId::new("R1"), vec!["n1.local".to_string(), "n2.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    let unassigned = vec![ExecutorId::new("a1"), ExecutorId::new("a2"), ExecutorId::new("b1"), ExecutorId::new("b2")];
    state.set_unassigned_executors(TopologyId::new("t"), unassigned.clone());

    let component_a = Component {
        id: ComponentId::new("A"),
        component_type: ComponentType::Source,
        execs: vec![ExecutorId::new("a1"), ExecutorId::new("a2")],
        parents: vec![],
        children: vec![ComponentId::new("B")],
    };
    let component_b = Component {
        id: ComponentId::new("B"),
        component_type: ComponentType::Processor,
        execs: vec![ExecutorId::new("b1"), ExecutorId::new("b2")],
        parents: vec![ComponentId::new("A")],
        children: vec![],
    };
    let mut executors = HashMap::new();
    let mut executor_to_component = HashMap::new();
    for (id, component_id) in [("a1", "A"), ("a2", "A"), ("b1", "B"), ("b2", "B")] {
        let eid = ExecutorId::new(id);
        executors.insert(eid.clone(), Executor::new(eid.clone(), 1.0, 1.0));
        executor_to_component.insert(eid, ComponentId::new(component_id));
    }
    let topology = TopologyDetails::new(TopologyId::new("t"), vec![component_a, component_b], executors, executor_to_component, 8.0);

    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");
    match result {
        SchedulingResult::Success { assignment, message } => {
            assert_eq!(message, "4/4 executors scheduled");

            // Locks the exact placement spec.md S4 asks for: with both nodes
            // tied on resource pressure and rack, N1 (lower node id) wins
            // every ranking tie, so all four executors co-locate on its
            // single slot in interleaved order A1, B1, A2, B2.
            assert_eq!(assignment.len(), 1, "both nodes tie on distance, so the id-sorted tie-break should keep everything on N1");
            let slot = WorkerSlot::new(NodeId::new("N1"), 6700);
            let placed: Vec<&ExecutorId> = assignment.get(&slot).expect("N1:6700 should hold the whole assignment").iter().map(|e| &e.id).collect();
            assert_eq!(
                placed,
                vec![&ExecutorId::new("a1"), &ExecutorId::new("b1"), &ExecutorId::new("a2"), &ExecutorId::new("b2")],
                "interleaved order A1, B1, A2, B2 should be preserved in the slot's executor list"
            );
        }
        other => panic!("expected success, got {:?}", other),
    }
}

#[test]
fn s5_unschedulable() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 10.0, 1.0, [6700]));
    let topography: HashMap<RackId, Vec<String>> = [(RackId::new("R1"), vec!["n1.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    state.set_unassigned_executors(TopologyId::new("t"), vec![ExecutorId::new("e1")]);

    let topology = single_component_topology("A", ComponentType::Source, vec![("e1", 1.0, 2.0)], 8.0);
    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");

    match result {
        SchedulingResult::Failure { status, message } => {
            assert_eq!(status, FailureStatus::FailNotEnoughResources);
            assert_eq!(message, "0/1 executors scheduled");
        }
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn s6_invalid_topology() {
    let mut nodes = HashMap::new();
    nodes.insert(NodeId::new("N1"), Node::new(NodeId::new("N1"), "n1.local", Some(RackId::new("R1")), 10.0, 10.0, [6700]));
    let topography: HashMap<RackId, Vec<String>> = [(RackId::new("R1"), vec!["n1.local".to_string()])].into_iter().collect();
    let mut state = ClusterState::new(nodes, topography);
    state.set_unassigned_executors(TopologyId::new("t"), vec![ExecutorId::new("e1")]);

    let topology = single_component_topology("A", ComponentType::Processor, vec![("e1", 1.0, 1.0)], 8.0);
    let result = scheduler::schedule(&mut state, &topology, &PlacementConfig::default()).expect("no contract violations in this fixture");

    match result {
        SchedulingResult::Failure { status, .. } => assert_eq!(status, FailureStatus::FailInvalidTopology),
        other => panic!("expected failure, got {:?}", other),
    }
}
