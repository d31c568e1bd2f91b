use online_backprop::{
    load_records, output_softmax, parse_records, softmax, test, train_loop, InitPolicy,
    NetworkSpec, TrainConfig,
};

const TRAIN: &str = "\
0.9 0.8 0.1\t1 0
0.8 0.9 0.2\t1 0
0.7 0.9 0.0\t1 0
0.1 0.2 0.9\t0 1
0.2 0.1 0.8\t0 1
0.0 0.2 0.7\t0 1
";

const TEST: &str = "\
0.85 0.85 0.15
0.15 0.15 0.85
";

fn spec() -> NetworkSpec {
    NetworkSpec {
        hidden_layers: vec![3],
        init: InitPolicy::Seeded { range: 0.05, seed: 2024 },
    }
}

#[test]
fn trained_network_separates_the_two_clusters() {
    let train = parse_records(TRAIN, true).unwrap();
    let network = spec().build(train.input_size(), train.output_size()).unwrap();
    let config = TrainConfig::new(500, 0.1);

    let (mut network, errors) = train_loop(network, &train.inputs, &train.targets, &config).unwrap();
    assert_eq!(errors.len(), 500);
    assert!(errors.last().unwrap() < &errors[0]);

    let classes = test(&mut network, &train.inputs).unwrap();
    assert_eq!(classes, vec![0, 0, 0, 1, 1, 1]);

    let unlabelled = parse_records(TEST, false).unwrap();
    assert_eq!(test(&mut network, &unlabelled.inputs).unwrap(), vec![0, 1]);
}

#[test]
fn softmax_after_testing_covers_only_the_final_row() {
    let train = parse_records(TRAIN, true).unwrap();
    let network = spec().build(3, 2).unwrap();
    let (mut network, _) = train_loop(network, &train.inputs, &train.targets, &TrainConfig::new(200, 0.1)).unwrap();

    let unlabelled = parse_records(TEST, false).unwrap();
    test(&mut network, &unlabelled.inputs).unwrap();
    let shown = output_softmax(&network);

    let last = network.forward(&unlabelled.inputs[1]).unwrap();
    let first = network.forward(&unlabelled.inputs[0]).unwrap();
    assert_eq!(shown, softmax(&last));
    assert_ne!(shown, softmax(&first));
}

#[test]
fn files_on_disk_feed_the_same_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let train_path = dir.path().join("online-backprop-e2e-train.txt");
    let test_path = dir.path().join("online-backprop-e2e-test.txt");
    std::fs::write(&train_path, TRAIN).unwrap();
    std::fs::write(&test_path, TEST).unwrap();

    let train = load_records(&train_path, true).unwrap();
    let unlabelled = load_records(&test_path, false).unwrap();
    assert_eq!((train.len(), unlabelled.len()), (6, 2));

    let network = spec().build(train.input_size(), train.output_size()).unwrap();
    let (mut network, _) = train_loop(network, &train.inputs, &train.targets, &TrainConfig::new(50, 0.1)).unwrap();
    assert_eq!(test(&mut network, &unlabelled.inputs).unwrap().len(), 2);
}
