use dynarray::{DynamicArray, DynamicArrayError};

#[test]
fn test_array_initialization() {
    let array: DynamicArray<u32> = DynamicArray::create(5).unwrap();

    assert_eq!(array.size(), 0);
    assert_eq!(array.length(), 5);
    assert!(array.is_empty());
}

#[test]
fn test_zero_capacity_initialization() {
    let array: DynamicArray<u32> = DynamicArray::create(0).unwrap();
    assert_eq!(array.length(), 0);
    assert_eq!(array.size(), 0);

    let array: DynamicArray<u32> = DynamicArray::default();
    assert_eq!(array.length(), 0);
}

#[test]
fn test_push_back_operations() {
    let mut array = DynamicArray::create(5).unwrap();

    assert!(array.push_back(10).is_ok());
    assert!(array.push_back(20).is_ok());
    assert!(array.push_back(30).is_ok());

    assert_eq!(array.size(), 3);
    assert_eq!(array.length(), 5);
    assert_eq!(array.get(0), Some(10));
    assert_eq!(array.get(1), Some(20));
    assert_eq!(array.get(2), Some(30));
}

#[test]
fn test_pop_back_lifo_order() {
    let mut array = DynamicArray::create(4).unwrap();

    array.push_back("first").unwrap();
    array.push_back("second").unwrap();
    array.push_back("third").unwrap();

    assert_eq!(array.pop_back(), Ok("third"));
    assert_eq!(array.pop_back(), Ok("second"));
    assert_eq!(array.pop_back(), Ok("first"));
    assert_eq!(array.pop_back(), Err(DynamicArrayError::EmptyContainer));

    assert!(array.is_empty());
    assert_eq!(array.length(), 4);
}

#[test]
fn test_push_pop_round_trip() {
    let mut array = DynamicArray::create(2).unwrap();
    array.push_back(1u8).unwrap();
    array.push_back(2u8).unwrap();

    let before: Vec<u8> = array.as_slice().to_vec();

    // Forces a growth step, which pop_back does not undo
    array.push_back(3).unwrap();
    assert_eq!(array.pop_back(), Ok(3));

    assert_eq!(array.size(), 2);
    assert_eq!(array.as_slice(), before.as_slice());
}

#[test]
fn test_clear_keeps_capacity() {
    let mut array = DynamicArray::create(3).unwrap();
    array.push_back(1).unwrap();
    array.push_back(2).unwrap();

    array.clear();

    assert!(array.is_empty());
    assert_eq!(array.length(), 3);
    assert_eq!(array.get(0), None);
}

#[test]
fn test_index_access() {
    let mut array = DynamicArray::new();
    array.push_back('x').unwrap();
    array.push_back('y').unwrap();

    assert_eq!(array[0], 'x');
    assert_eq!(array[1], 'y');
    assert_eq!(array.try_get(1), Ok('y'));
}

#[test]
#[should_panic]
fn test_index_out_of_bounds_panics() {
    let mut array = DynamicArray::create(4).unwrap();
    array.push_back(1).unwrap();
    let _ = array[1];
}

#[test]
fn test_handles_refer_to_caller_data() {
    let values = [String::from("alpha"), String::from("beta")];
    let mut array = DynamicArray::create(0).unwrap();

    for value in &values {
        array.push_back(value).unwrap();
    }
    array.pop_back().unwrap();
    array.destroy();

    // The pointees outlive the array untouched
    assert_eq!(values[0], "alpha");
    assert_eq!(values[1], "beta");
}
