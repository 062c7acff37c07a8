use dsa_collections::collections::binary_tree::TreeSet;
use dsa_collections::collections::graph::Graph;
use dsa_collections::collections::linked::SinglyLinkedList;

fn main() {
    println!("\n[SinglyLinkedList]\n");

    let mut list = SinglyLinkedList::new();
    for i in 1..=3 {
        list.push_back(i);
        println!("{list}");
    }

    list.remove_value(&2);
    println!("{list}");

    if let Some(one) = list.find(&1) {
        list.insert_after(one, 7);
    }
    println!("{list:?}");

    // for _ in 0..=3 {
    //     println!("{:?}", list.pop_front());
    // }

    println!("\n[TreeSet]\n");

    let set: TreeSet<_> = [6, 2, 9, 4, 2].into_iter().collect();
    println!("{set:?}");
    println!("height: {}", set.height());

    println!("\n[Graph]\n");

    let mut graph = Graph::new();
    let hub = graph.add_vertex("hub");
    for name in ["north", "east", "south"] {
        let v = graph.add_vertex(name);
        graph.add_edge_undirected(hub, v);
    }
    println!("{graph:?}");

    print!("bfs:");
    for v in graph.bfs(hub) {
        print!(" {}", graph[v]);
    }
    println!();
}
