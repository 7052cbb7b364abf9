//! Key ordering and value equality strategies.
//!
//! A tree never compares keys or values on its own; it asks the strategies it
//! was built with. Closures work directly:
//!
//! ```rust
//! use std::cmp::Ordering;
//! use ordtree::{AvlTree, Options};
//!
//! // Case-insensitive keys.
//! let options = Options::default().compare_keys(|a: &String, b: &String| {
//!     a.to_lowercase().cmp(&b.to_lowercase())
//! });
//! let mut tree: AvlTree<String, u32, _> = AvlTree::with_options(options);
//! tree.insert("Hello".to_string(), 1).unwrap();
//! assert_eq!(tree.search(&"HELLO".to_string()), &[1]);
//! ```

use std::cmp::Ordering;

/// Total order over keys.
///
/// Nearest-key searches additionally use [`distance`](Self::distance) to rank
/// candidates. Those searches only return the truly nearest key when the
/// distance grows with the actual gap between keys; the default
/// implementation only knows "equal" (0) and "different" (1).
pub trait Comparator<K: ?Sized> {
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Magnitude of the gap between `a` and `b`.
    fn distance(&self, a: &K, b: &K) -> f64 {
        match self.compare(a, b) {
            Ordering::Equal => 0.0,
            _ => 1.0,
        }
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// The key type's own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Primitive numbers, ordered numerically with `|a - b|` as distance.
///
/// Floats are ordered with [`f64::total_cmp`], so `NaN` sorts after every
/// other value instead of breaking the tree.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericOrder;

/// Numbers usable with [`NumericOrder`].
pub trait NumericKey: Copy {
    fn numeric_cmp(&self, other: &Self) -> Ordering;

    /// `|self - other|`. Integers take the difference in their own type
    /// first, so keys beyond 2^53 keep distinct distances.
    fn numeric_distance(&self, other: &Self) -> f64;
}

macro_rules! numeric_key_int {
    ($($t:ty),*) => {$(
        impl NumericKey for $t {
            #[inline]
            fn numeric_cmp(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }

            #[inline]
            fn numeric_distance(&self, other: &Self) -> f64 {
                self.abs_diff(*other) as f64
            }
        }
    )*};
}

numeric_key_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl NumericKey for f32 {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn numeric_distance(&self, other: &Self) -> f64 {
        (f64::from(*self) - f64::from(*other)).abs()
    }
}

impl NumericKey for f64 {
    #[inline]
    fn numeric_cmp(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }

    #[inline]
    fn numeric_distance(&self, other: &Self) -> f64 {
        (self - other).abs()
    }
}

impl<K: NumericKey> Comparator<K> for NumericOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.numeric_cmp(b)
    }

    #[inline]
    fn distance(&self, a: &K, b: &K) -> f64 {
        a.numeric_distance(b)
    }
}

/// A classic three-way comparison function returning a signed number:
/// negative, zero or positive, with the magnitude taken as the distance.
///
/// ```rust
/// use ordtree::{BinarySearchTree, Options, Signed};
///
/// let options = Options::default().compare_keys(Signed(|a: &i64, b: &i64| a - b));
/// let mut tree: BinarySearchTree<i64, &str, _> = BinarySearchTree::with_options(options);
/// tree.insert(3, "three").unwrap();
/// tree.insert(10, "ten").unwrap();
/// assert_eq!(tree.search_nearest(&8).map(|n| *n.key()), Some(10));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Signed<F>(pub F);

impl<K: ?Sized, F> Comparator<K> for Signed<F>
where
    F: Fn(&K, &K) -> i64,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        (self.0)(a, b).cmp(&0)
    }

    #[inline]
    fn distance(&self, a: &K, b: &K) -> f64 {
        (self.0)(a, b).unsigned_abs() as f64
    }
}

/// Equality between values stored under the same key.
pub trait ValueEquality<V: ?Sized> {
    fn equal(&self, a: &V, b: &V) -> bool;
}

impl<V: ?Sized, F> ValueEquality<V> for F
where
    F: Fn(&V, &V) -> bool,
{
    #[inline]
    fn equal(&self, a: &V, b: &V) -> bool {
        self(a, b)
    }
}

/// The value type's own [`PartialEq`] implementation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultEquality;

impl<V: PartialEq + ?Sized> ValueEquality<V> for DefaultEquality {
    #[inline]
    fn equal(&self, a: &V, b: &V) -> bool {
        a == b
    }
}
