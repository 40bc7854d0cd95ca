//! Illustrative C++ retrieval code.
//!
//! Generates a self-contained C++ program that reads the embedded blob back
//! out of its container and compares it against user-supplied hex. Output is
//! for human consumption; nothing in the crate consumes it.

use crate::container::Placement;
use crate::crypto::CipherBlob;

/// Generate a C++ program reading the blob from its recorded placement.
///
/// The snippet opens the target container, seeks to the blob's offset, reads
/// its length in bytes, hex-encodes them and compares against user input.
/// The blob's reference hex is appended as a trailing comment.
pub fn retrieval_snippet(blob: &CipherBlob, placement: &Placement) -> String {
    format!(
        r#"// Example: read the stored blob and verify a hex string against it
#include <fstream>
#include <vector>
#include <string>
#include <iostream>

bool verifyBlob(const std::string& userInput) {{
    std::ifstream file("{path}", std::ios::binary);
    if (!file) {{
        std::cout << "Failed to open file" << std::endl;
        return false;
    }}

    // Seek to the data position
    file.seekg({offset});

    // Read {length} bytes
    std::vector<unsigned char> stored({length});
    file.read(reinterpret_cast<char*>(stored.data()), stored.size());

    // Hex-encode and compare with the user input
    std::string storedHex;
    for (unsigned char byte : stored) {{
        char hex[3];
        sprintf(hex, "%02x", byte);
        storedHex += hex;
    }}

    return storedHex == userInput;
}}

int main() {{
    std::string userInput;
    std::cout << "Enter hex to verify: ";
    std::cin >> userInput;

    if (verifyBlob(userInput)) {{
        std::cout << "Match!" << std::endl;
    }} else {{
        std::cout << "No match." << std::endl;
    }}

    return 0;
}}

// Stored blob for reference:
// {hex}
"#,
        path = placement.path.display(),
        offset = placement.offset,
        length = placement.length,
        hex = blob.to_hex(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::encrypt_message;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    #[test]
    fn test_snippet_embeds_placement_and_hex() {
        let mut rng = StdRng::seed_from_u64(20);
        let blob = encrypt_message("Hello World", "mysecretkey", &mut rng);
        let placement = Placement {
            file_index: 4,
            path: PathBuf::from("bin_files/file_4.bin"),
            offset: 1337,
            length: blob.size(),
        };

        let code = retrieval_snippet(&blob, &placement);

        assert!(code.contains("bin_files/file_4.bin"));
        assert!(code.contains("file.seekg(1337)"));
        assert!(code.contains(&format!("std::vector<unsigned char> stored({})", blob.size())));
        assert!(code.contains(&blob.to_hex()));
    }
}
