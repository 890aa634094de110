/// Swaps every pair of `items`, turning an iterator of `(a, b)` into one of `(b, a)`.
///
/// Works on anything that iterates pairs, including a bidict or one of its views.
pub fn inverted<A, B, It>(items: It) -> impl Iterator<Item = (B, A)>
where
    It: IntoIterator<Item = (A, B)>,
{
    items.into_iter().map(|(a, b)| (b, a))
}
