/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_array_types::{V3, M33};

/// Multiply an N x 3 matrix of row vectors by a 3 x 3 matrix.
pub fn dot_n3_33(coords: &[V3], m: &M33) -> Vec<V3>
{
    let cols = [m.col(0), m.col(1), m.col(2)];
    coords.iter()
        .map(|row| V3::from_fn(|c| row.dot(&cols[c])))
        .collect()
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::mat;

    #[test]
    fn agrees_with_vector_matrix_product() {
        let m = mat::from_fn(|r, c| (3 * r + c) as f64 - 4.0);
        let rows = vec![V3([1.0, 2.0, 3.0]), V3([-1.0, 0.5, 0.0])];
        let expected: Vec<V3> = rows.iter().map(|v| v * &m).collect();
        assert_eq!(dot_n3_33(&rows, &m), expected);
        assert!(dot_n3_33(&[], &m).is_empty());
    }
}
