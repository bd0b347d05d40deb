use lazy_stream::{Stream, StreamError};

#[test]
fn test_repeat() {
    let result = Stream::repeat(42).take(5);
    assert_eq!(result, vec![42, 42, 42, 42, 42]);
}

#[test]
fn test_iterate() {
    let result = Stream::iterate(1, |x| x * 2).take(5);
    assert_eq!(result, vec![1, 2, 4, 8, 16]);
}

#[test]
fn test_of_collect_round_trip() {
    let result = Stream::of(vec![1, 2, 3, 4, 5]).collect();
    assert_eq!(result, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_of_accepts_any_ordered_collection() {
    let result = Stream::of(1..=3).collect();
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_of_empty_collect() {
    let result = Stream::of(Vec::<i32>::new()).collect();
    assert_eq!(result, Vec::<i32>::new());
}

#[test]
fn test_of_empty_head_or() {
    assert_eq!(Stream::of(Vec::<i32>::new()).head_or(9), 9);
}

#[test]
fn test_take_more_than_available() {
    let result = Stream::of(vec![1, 2, 3]).take(10);
    assert_eq!(result, vec![1, 2, 3]);
}

#[test]
fn test_take_zero() {
    let mut stream = Stream::of(vec![1, 2, 3]);
    assert_eq!(stream.take(0), Vec::<i32>::new());
    // nothing was consumed
    assert_eq!(stream.collect(), vec![1, 2, 3]);
}

#[test]
fn test_head_consumes_one_element_per_call() {
    let mut stream = Stream::of(vec![1, 2]);
    assert_eq!(stream.head(), Ok(1));
    assert_eq!(stream.head(), Ok(2));
    assert_eq!(stream.head(), Err(StreamError::Exhausted));
}

#[test]
fn test_head_on_exhausted_is_error() {
    let mut stream = Stream::of(Vec::<i32>::new());
    assert_eq!(stream.head(), Err(StreamError::Exhausted));
}

#[test]
fn test_head_or_on_infinite() {
    assert_eq!(Stream::repeat(7).head_or(0), 7);
}

#[test]
fn test_has_remaining_lifecycle() {
    let mut stream = Stream::of(vec![1]);
    assert!(stream.has_remaining());
    assert_eq!(stream.collect(), vec![1]);
    assert!(!stream.has_remaining());
    // exhausted streams keep producing well-defined empty results
    assert_eq!(stream.collect(), Vec::<i32>::new());
    assert_eq!(stream.take(3), Vec::<i32>::new());
}

#[test]
fn test_iter_adapter() {
    let mut stream = Stream::iterate(1, |x| x + 1);
    let result: Vec<i32> = stream.iter().take(4).collect();
    assert_eq!(result, vec![1, 2, 3, 4]);
    // the adapter pulls from the live stream, so iteration resumes
    assert_eq!(stream.head(), Ok(5));
}

#[test]
fn test_debug_reports_source_kind() {
    let finite = Stream::of(vec![1, 2]);
    let infinite = Stream::repeat(1);
    assert!(format!("{:?}", finite).contains("finite"));
    assert!(format!("{:?}", infinite).contains("infinite"));
}
