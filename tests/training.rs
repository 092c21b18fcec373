use digit_nn::{argmax, one_hot, train_loop, Classifier, Dataset, Matrix, TrainConfig};

fn two_corner_dataset() -> Dataset {
    let mut ds = Dataset::new(2);
    ds.push(0, vec![1.0, 0.0, 0.0, 0.0]).unwrap();
    ds.push(1, vec![0.0, 0.0, 0.0, 1.0]).unwrap();
    ds
}

#[test]
fn learns_two_corner_pixels() {
    let mut c = Classifier::seeded(4, 2, 12345);
    train_loop(&mut c, &two_corner_dataset(), &TrainConfig::new(500, 0.5), |_, _| {}).unwrap();

    assert_eq!(argmax(&c.predict(&[1.0, 0.0, 0.0, 0.0]).unwrap()), Some(0));
    assert_eq!(argmax(&c.predict(&[0.0, 0.0, 0.0, 1.0]).unwrap()), Some(1));
}

#[test]
fn training_is_deterministic_for_fixed_start() {
    let config = TrainConfig::new(50, 0.25);
    let ds = two_corner_dataset();

    let mut a = Classifier::seeded(4, 2, 99);
    let mut b = Classifier::seeded(4, 2, 99);
    train_loop(&mut a, &ds, &config, |_, _| {}).unwrap();
    train_loop(&mut b, &ds, &config, |_, _| {}).unwrap();

    let bits = |c: &Classifier| c.weights().as_slice().iter().map(|w| w.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a), bits(&b));
}

#[test]
fn different_seeds_start_differently() {
    let a = Classifier::seeded(4, 2, 1);
    let b = Classifier::seeded(4, 2, 2);
    assert_ne!(a.weights(), b.weights());
}

#[test]
fn single_update_moves_target_output_up() {
    let input = [0.0, 1.0, 1.0, 0.0, 1.0, 0.0];
    for seed in 0..10 {
        let mut c = Classifier::seeded(6, 4, seed);
        let before = c.predict(&input).unwrap();
        c.update(&input, &one_hot(3, 4), 0.01).unwrap();
        let after = c.predict(&input).unwrap();

        assert!(after[3] > before[3]);
        for j in 0..3 {
            assert!(after[j] < before[j]);
        }
    }
}

#[test]
fn zero_vector_is_one_half_even_after_training() {
    let mut c = Classifier::from_weights(Matrix::from_vec(2, 4, vec![3.0, -2.0, 0.5, 9.0, -7.0, 1.0, 1.0, 1.0]).unwrap());
    train_loop(&mut c, &two_corner_dataset(), &TrainConfig::new(10, 0.5), |_, _| {}).unwrap();
    assert_eq!(c.predict(&[0.0; 4]).unwrap(), vec![0.5, 0.5]);
}
