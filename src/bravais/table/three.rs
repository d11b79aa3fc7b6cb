/* ************************************************************************ **
** This file is part of kpath, and is licensed under EITHER the MIT license **
** or the Apache 2.0 license, at your option.                               **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

//! Three-dimensional tables (Setyawan and Curtarolo, 2010).

use super::KpathTable;

const H: f64 = 0.5;
const Q: f64 = 0.25;
const T: f64 = 1.0 / 3.0;

lazy_static! {
    pub(super) static ref CUB: KpathTable = KpathTable::new(&[
        ("M", [H, H, 0.0]),
        ("R", [H, H, H]),
        ("X", [0.0, H, 0.0]),
    ], "G-X-M-G-R-X|M-R");

    pub(super) static ref FCC: KpathTable = KpathTable::new(&[
        ("K", [3.0 / 8.0, 3.0 / 8.0, 3.0 / 4.0]),
        ("L", [H, H, H]),
        ("U", [5.0 / 8.0, Q, 5.0 / 8.0]),
        ("W", [H, Q, 3.0 / 4.0]),
        ("X", [H, 0.0, H]),
    ], "G-X-W-K-G-L-U-W-L-K|U-X");

    pub(super) static ref BCC: KpathTable = KpathTable::new(&[
        ("H", [H, -H, H]),
        ("P", [Q, Q, Q]),
        ("N", [0.0, 0.0, H]),
    ], "G-H-N-G-P-H|P-N");

    pub(super) static ref TET: KpathTable = KpathTable::new(&[
        ("A", [H, H, H]),
        ("M", [H, H, 0.0]),
        ("R", [0.0, H, H]),
        ("X", [0.0, H, 0.0]),
        ("Z", [0.0, 0.0, H]),
    ], "G-X-M-G-Z-R-A-Z|X-R|M-A");

    pub(super) static ref ORC: KpathTable = KpathTable::new(&[
        ("R", [H, H, H]),
        ("S", [H, H, 0.0]),
        ("T", [0.0, H, H]),
        ("U", [H, 0.0, H]),
        ("X", [H, 0.0, 0.0]),
        ("Y", [0.0, H, 0.0]),
        ("Z", [0.0, 0.0, H]),
    ], "G-X-S-Y-G-Z-U-R-T-Z|Y-T|U-X|S-R");

    pub(super) static ref HEX: KpathTable = KpathTable::new(&[
        ("A", [0.0, 0.0, H]),
        ("H", [T, T, H]),
        ("K", [T, T, 0.0]),
        ("L", [H, 0.0, H]),
        ("M", [H, 0.0, 0.0]),
    ], "G-M-K-G-A-L-H-A|L-M|K-H");

    pub(super) static ref TRI_A: KpathTable = KpathTable::new(&[
        ("L", [H, H, 0.0]),
        ("M", [0.0, H, H]),
        ("N", [H, 0.0, H]),
        ("R", [H, H, H]),
        ("X", [H, 0.0, 0.0]),
        ("Y", [0.0, H, 0.0]),
        ("Z", [0.0, 0.0, H]),
    ], TRI_PATH);

    pub(super) static ref TRI_B: KpathTable = KpathTable::new(&[
        ("L", [H, -H, 0.0]),
        ("M", [0.0, 0.0, H]),
        ("N", [-H, -H, H]),
        ("R", [0.0, -H, H]),
        ("X", [0.0, -H, 0.0]),
        ("Y", [H, 0.0, 0.0]),
        ("Z", [-H, 0.0, H]),
    ], TRI_PATH);
}

const TRI_PATH: &str = "X-G-Y|L-G-Z|N-G-M|R-G";
pub(super) const ORCF1_PATH: &str = "G-Y-T-Z-G-X-A1-Y|T-X1|X-A-Z|L-G";
pub(super) const ORCF3_PATH: &str = "G-Y-T-Z-G-X-A1-Y|X-A-Z|L-G";
pub(super) const MCLC3_PATH: &str = "G-Y-F-H-Z-I-F1|H1-Y1-X-G-N|M-G";
pub(super) const MCLC4_PATH: &str = "G-Y-F-H-Z-I|H1-Y1-X-G-N|M-G";

pub(super) fn bct1(eta: f64) -> KpathTable {
    KpathTable::new(&[
        ("M", [-H, H, H]),
        ("N", [0.0, H, 0.0]),
        ("P", [Q, Q, Q]),
        ("X", [0.0, 0.0, H]),
        ("Z", [eta, eta, -eta]),
        ("Z1", [-eta, 1.0 - eta, eta]),
    ], "G-X-M-G-Z-P-N-Z1-M|X-P")
}

pub(super) fn bct2(eta: f64, csi: f64) -> KpathTable {
    KpathTable::new(&[
        ("N", [0.0, H, 0.0]),
        ("P", [Q, Q, Q]),
        ("S", [-eta, eta, eta]),
        ("S1", [eta, 1.0 - eta, -eta]),
        ("X", [0.0, 0.0, H]),
        ("Y", [-csi, csi, H]),
        ("Y1", [H, H, -csi]),
        ("Z", [H, H, -H]),
    ], "G-X-Y-S-G-Z-S1-N-P-Y1-Z|X-P")
}

/// `orcf1` and `orcf3` share their points.
pub(super) fn orcf13(zeta: f64, eta: f64, path: &str) -> KpathTable {
    KpathTable::new(&[
        ("A", [H, H + zeta, zeta]),
        ("A1", [H, H - zeta, 1.0 - zeta]),
        ("L", [H, H, H]),
        ("T", [1.0, H, H]),
        ("X", [0.0, eta, eta]),
        ("X1", [1.0, 1.0 - eta, 1.0 - eta]),
        ("Y", [H, 0.0, H]),
        ("Z", [H, H, 0.0]),
    ], path)
}

pub(super) fn orcf2(eta: f64, phi: f64, delta: f64) -> KpathTable {
    KpathTable::new(&[
        ("C", [H, H - eta, 1.0 - eta]),
        ("C1", [H, H + eta, eta]),
        ("D", [H - delta, H, 1.0 - delta]),
        ("D1", [H + delta, H, delta]),
        ("L", [H, H, H]),
        ("H", [1.0 - phi, H - phi, H]),
        ("H1", [phi, H + phi, H]),
        ("X", [0.0, H, H]),
        ("Y", [H, 0.0, H]),
        ("Z", [H, H, 0.0]),
    ], "G-Y-C-D-X-G-Z-D1-H-C|C1-Z|X-H1|H-Y|L-G")
}

pub(super) fn orci(csi: f64, eta: f64, dlt: f64, mu: f64) -> KpathTable {
    KpathTable::new(&[
        ("L", [-mu, mu, H - dlt]),
        ("L1", [mu, -mu, H + dlt]),
        ("L2", [H - dlt, H + dlt, -mu]),
        ("R", [0.0, H, 0.0]),
        ("S", [H, 0.0, 0.0]),
        ("T", [0.0, 0.0, H]),
        ("W", [Q, Q, Q]),
        ("X", [-csi, csi, csi]),
        ("X1", [csi, 1.0 - csi, -csi]),
        ("Y", [eta, -eta, eta]),
        ("Y1", [1.0 - eta, eta, -eta]),
        ("Z", [H, H, -H]),
    ], "G-X-L-T-W-R-X1-Z-G-Y-S-W|L1-Y|Y1-Z")
}

pub(super) fn orcc(zeta: f64) -> KpathTable {
    KpathTable::new(&[
        ("A", [zeta, zeta, H]),
        ("A1", [-zeta, 1.0 - zeta, H]),
        ("R", [0.0, H, H]),
        ("S", [0.0, H, 0.0]),
        ("T", [-H, H, H]),
        ("X", [zeta, zeta, 0.0]),
        ("X1", [-zeta, 1.0 - zeta, 0.0]),
        ("Y", [-H, H, 0.0]),
        ("Z", [0.0, 0.0, H]),
    ], "G-X-S-R-A-Z-G-Y-X1-A1-T-Y|Z-T")
}

pub(super) fn rhl1(eta: f64, nu: f64) -> KpathTable {
    KpathTable::new(&[
        ("B", [eta, H, 1.0 - eta]),
        ("B1", [H, 1.0 - eta, eta - 1.0]),
        ("F", [H, H, 0.0]),
        ("L", [H, 0.0, 0.0]),
        ("L1", [0.0, 0.0, -H]),
        ("P", [eta, nu, nu]),
        ("P1", [1.0 - nu, 1.0 - nu, 1.0 - eta]),
        ("P2", [nu, nu, eta - 1.0]),
        ("Q", [1.0 - nu, nu, 0.0]),
        ("X", [nu, 0.0, -nu]),
        ("Z", [H, H, H]),
    ], "G-L-B1|B-Z-G-X|Q-F-P1-Z|L-P")
}

pub(super) fn rhl2(eta: f64, nu: f64) -> KpathTable {
    KpathTable::new(&[
        ("F", [H, -H, 0.0]),
        ("L", [H, 0.0, 0.0]),
        ("P", [1.0 - nu, -nu, 1.0 - nu]),
        ("P1", [nu, nu - 1.0, nu - 1.0]),
        ("Q", [eta, eta, eta]),
        ("Q1", [1.0 - eta, -eta, -eta]),
        ("Z", [H, -H, H]),
    ], "G-P-Z-Q-G-F-P1-Q1-L-Z")
}

pub(super) fn mcl(eta: f64, nu: f64) -> KpathTable {
    KpathTable::new(&[
        ("A", [H, H, 0.0]),
        ("C", [0.0, H, H]),
        ("D", [H, 0.0, H]),
        ("D1", [H, 0.0, -H]),
        ("E", [H, H, H]),
        ("H", [0.0, eta, 1.0 - nu]),
        ("H1", [0.0, 1.0 - eta, nu]),
        ("H2", [0.0, eta, -nu]),
        ("M", [H, eta, 1.0 - nu]),
        ("M1", [H, 1.0 - eta, nu]),
        ("M2", [H, eta, -nu]),
        ("X", [0.0, H, 0.0]),
        ("Y", [0.0, 0.0, H]),
        ("Y1", [0.0, 0.0, -H]),
        ("Z", [H, 0.0, 0.0]),
    ], "G-Y-H-C-E-M1-A-X-H1|M-D-Z|Y-D")
}

/// `mclc2` has one point more than `mclc1`, and a shorter path.
pub(super) fn mclc12(zeta: f64, eta: f64, psi: f64, phi: f64, second: bool) -> KpathTable {
    let points = [
        ("N", [H, 0.0, 0.0]),
        ("N1", [0.0, -H, 0.0]),
        ("F", [1.0 - zeta, 1.0 - zeta, 1.0 - eta]),
        ("F1", [zeta, zeta, eta]),
        ("F2", [-zeta, -zeta, 1.0 - eta]),
        ("F3", [1.0 - zeta, -zeta, 1.0 - eta]),
        ("I", [phi, 1.0 - phi, H]),
        ("I1", [1.0 - phi, phi - 1.0, H]),
        ("L", [H, H, H]),
        ("M", [H, 0.0, H]),
        ("X", [1.0 - psi, psi - 1.0, 0.0]),
        ("X1", [psi, 1.0 - psi, 0.0]),
        ("X2", [psi - 1.0, -psi, 0.0]),
        ("Y", [H, H, 0.0]),
        ("Y1", [-H, -H, 0.0]),
        ("Z", [0.0, 0.0, H]),
    ];
    match second {
        false => {
            let points: Vec<_> = points.iter().cloned().filter(|&(label, _)| label != "F3").collect();
            KpathTable::new(&points, "G-Y-F-L-I|I1-Z-F1|Y-X1|X-G-N|M-G")
        },
        true => KpathTable::new(&points, "G-Y-F-L-I|I1-Z-F1|N-G-M"),
    }
}

/// `mclc3` and `mclc4` share their points.
pub(super) fn mclc34(mu: f64, delta: f64, zeta: f64, eta: f64, phi: f64, psi: f64, path: &str) -> KpathTable {
    KpathTable::new(&[
        ("F", [1.0 - phi, 1.0 - phi, 1.0 - psi]),
        ("F1", [phi, phi - 1.0, psi]),
        ("F2", [1.0 - phi, -phi, 1.0 - psi]),
        ("H", [zeta, zeta, eta]),
        ("H1", [1.0 - zeta, -zeta, 1.0 - eta]),
        ("H2", [-zeta, -zeta, 1.0 - eta]),
        ("I", [H, -H, H]),
        ("M", [H, 0.0, H]),
        ("N", [H, 0.0, 0.0]),
        ("N1", [0.0, -H, 0.0]),
        ("X", [H, -H, 0.0]),
        ("Y", [mu, mu, delta]),
        ("Y1", [1.0 - mu, -mu, -delta]),
        ("Y2", [-mu, -mu, -delta]),
        ("Y3", [mu, mu - 1.0, delta]),
        ("Z", [0.0, 0.0, H]),
    ], path)
}

pub(super) fn mclc5(zeta: f64, eta: f64, mu: f64, nu: f64, omega: f64, delta: f64, rho: f64) -> KpathTable {
    KpathTable::new(&[
        ("F", [nu, nu, omega]),
        ("F1", [1.0 - nu, 1.0 - nu, 1.0 - omega]),
        ("F2", [nu, nu - 1.0, omega]),
        ("H", [zeta, zeta, eta]),
        ("H1", [1.0 - zeta, -zeta, 1.0 - eta]),
        ("H2", [-zeta, -zeta, 1.0 - eta]),
        ("I", [rho, 1.0 - rho, H]),
        ("I1", [1.0 - rho, rho - 1.0, H]),
        ("L", [H, H, H]),
        ("M", [H, 0.0, H]),
        ("N", [H, 0.0, 0.0]),
        ("N1", [0.0, -H, 0.0]),
        ("X", [H, -H, 0.0]),
        ("Y", [mu, mu, delta]),
        ("Y1", [1.0 - mu, -mu, -delta]),
        ("Y2", [-mu, -mu, -delta]),
        ("Y3", [mu, mu - 1.0, delta]),
        ("Z", [0.0, 0.0, H]),
    ], "G-Y-F-L-I|I1-Z-H-F1|H1-Y1-X-G-N|M-G")
}

#[cfg(test)]
#[deny(unused)]
mod tests {
    use super::*;

    #[test]
    fn mclc2_adds_a_point() {
        let first = mclc12(0.5, 1.3, 0.6, 0.7, false);
        let second = mclc12(0.5, 1.3, 0.6, 0.7, true);
        assert!(!first.points.contains_key("F3"));
        assert_eq!(second.points.len(), first.points.len() + 1);
        assert!(second.path.len() < first.path.len());
    }

    #[test]
    fn shared_points() {
        assert_eq!(TRI_A.path, TRI_B.path);
        assert_ne!(TRI_A.points, TRI_B.points);

        let one = orcf13(0.28, 0.34, ORCF1_PATH);
        let three = orcf13(0.28, 0.34, ORCF3_PATH);
        assert_eq!(one.points, three.points);
        assert_ne!(one.path, three.path);
    }
}
