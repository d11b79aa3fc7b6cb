/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use kpath_array_types::V3;

use crate::Lattice;
use crate::util::dot_n3_33;

/// A batch of points that remembers which coordinate system it is in.
///
/// "Carts" are absolute coordinates, "Fracs" are coefficients of the
/// lattice vectors.  For k-points, the lattice in question is the
/// reciprocal cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Coords {
    Carts(Vec<V3>),
    Fracs(Vec<V3>),
}

impl Coords {
    pub fn len(&self) -> usize
    { self.as_slice().len() }

    pub fn is_empty(&self) -> bool
    { self.len() == 0 }

    fn as_slice(&self) -> &[V3]
    { match *self {
        Coords::Carts(ref c) => c,
        Coords::Fracs(ref c) => c,
    }}
}

// conversions
impl Coords {
    pub fn into_carts(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        Coords::Carts(c) => c,
        Coords::Fracs(c) => dot_n3_33(&c, lattice.matrix()),
    }}

    pub fn into_fracs(self, lattice: &Lattice) -> Vec<V3>
    { match self {
        Coords::Carts(c) => dot_n3_33(&c, lattice.inverse_matrix()),
        Coords::Fracs(c) => c,
    }}
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;
    use kpath_array_types::{M33, mat};
    use crate::Coords::{Fracs, Carts};

    // make sure the library correctly chooses whether to use the
    // regular matrix, the inverse matrix, or no matrix
    #[test]
    fn div_vs_mul() {
        let x = |mag| vec![V3([mag, 0.0, 0.0])];
        let lattice = Lattice::new(&(M33::eye() * 2.0)).unwrap();

        assert_eq!(x(1.0), Fracs(x(1.0)).into_fracs(&lattice));
        assert_eq!(x(2.0), Fracs(x(1.0)).into_carts(&lattice));

        assert_eq!(x(0.5), Carts(x(1.0)).into_fracs(&lattice));
        assert_eq!(x(1.0), Carts(x(1.0)).into_carts(&lattice));
    }

    // make sure matrix multiplication is done in the correct order
    #[test]
    fn multiplication_order() {
        // a matrix not equal to its transpose
        let lattice = Lattice::new(&mat::from_array([
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 0.0, 0.0],
        ])).unwrap();

        // what happens to [1,0,0] when we interpret it in one coord system
        //  and then convert to the other system
        let input = vec![V3([1.0, 0.0, 0.0])];
        let frac_to_cart = vec![V3([0.0, 1.0, 0.0])];
        let cart_to_frac = vec![V3([0.0, 0.0, 1.0])];

        assert_eq!(&frac_to_cart, &Fracs(input.clone()).into_carts(&lattice));
        assert_eq!(&cart_to_frac, &Carts(input.clone()).into_fracs(&lattice));
    }

    #[test]
    fn reciprocal_round_trip() {
        for _ in 0..10 {
            let recip = Lattice::random_uniform(4.0).reciprocal();
            let fracs: Vec<V3> = (0..7).map(|_| V3::from_fn(|_| ::rand::random::<f64>())).collect();

            let carts = Fracs(fracs.clone()).into_carts(&recip);
            assert_eq!(carts.len(), fracs.len());
            assert_close!(abs=1e-9, Carts(carts).into_fracs(&recip), fracs);
        }
        assert!(Fracs(vec![]).is_empty());
    }
}
