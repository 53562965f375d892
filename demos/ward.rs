//! Ward clustering on a simple 2D dataset: merge history, flat cuts, and a
//! cross-check against the brute-force formulation.

use dendro::{Clustering, Ward};

fn main() {
    // Three well-separated clusters in 2D.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
    ];

    let ward = Ward::new(3);
    let tree = ward.fit(&data).unwrap();

    println!("=== Merge history ===");
    for (step, m) in tree.merges().iter().enumerate() {
        println!(
            "  step {:2}: {:2} + {:2} at height {:7.3} (size {})",
            step + 1,
            m.left,
            m.right,
            m.height,
            m.size
        );
    }

    println!("\n=== Flat cut (k=3) ===");
    let labels = ward.fit_predict(&data).unwrap();
    for (i, label) in labels.iter().enumerate() {
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i][0], data[i][1], label);
    }

    println!("\n=== Leaf order ===");
    println!("  {:?}", tree.leaf_order());

    let reference = ward.fit_reference(&data).unwrap();
    let agree = tree
        .merges()
        .iter()
        .zip(reference.merges().iter())
        .all(|(a, b)| {
            a.left == b.left && a.right == b.right && (a.height - b.height).abs() < 1e-6
        });
    println!("\nIncremental and reference formulations agree: {agree}");
}
