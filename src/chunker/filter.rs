/// Drop chunks whose trimmed length is below `min_chunk_length` characters.
/// Order is preserved and a second pass over the output changes nothing.
pub fn filter_chunks(chunks: Vec<String>, min_chunk_length: usize) -> Vec<String> {
    chunks
        .into_iter()
        .filter(|chunk| chunk.trim().chars().count() >= min_chunk_length)
        .collect()
}
