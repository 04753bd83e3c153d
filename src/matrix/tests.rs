// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    matrix::{Mat2, Mat2d, Mat3d, Matrix, Matrix2, Matrix3, Matrix4},
    utils::num::Zero,
    vector::Vector,
};
use approx::assert_relative_eq;
use std::hash::{DefaultHasher, Hash, Hasher};

#[track_caller]
fn assert_elems_close<const ROWS: usize, const COLS: usize>(
    lhs: Matrix<f64, ROWS, COLS>,
    rhs: Matrix<f64, ROWS, COLS>,
) {
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        assert_relative_eq!(*x, *y, epsilon = 1e-12);
    }
}

fn std_hash<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_construction() {
    #[rustfmt::skip]
    let expected = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);

    let from_rows = Matrix::from_rows([Vector::new([1, 2, 3]), Vector::new([4, 5, 6])]);
    assert_eq!(from_rows, expected);

    let from_slice = Matrix::<_, 2, 3>::from_slice(&[1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(from_slice, expected);

    let data = [1, 2, 3, 4, 5, 6];
    let from_ptr = unsafe { Matrix::<i32, 2, 3>::from_ptr(data.as_ptr()) };
    assert_eq!(from_ptr, expected);

    assert_eq!(Matrix::<i32, 2, 3>::try_from_slice(&[1, 2, 3]), None);
    assert_eq!(Matrix::from([[1, 2, 3], [4, 5, 6]]), expected);
    assert_eq!(<[[i32; 3]; 2]>::from(expected), [[1, 2, 3], [4, 5, 6]]);

    assert_eq!(Matrix::<i32, 2, 3>::default(), Matrix::<i32, 2, 3>::ZERO);
    assert!(Matrix::<f32, 3, 2>::splat(0.5).iter().all(|elem| *elem == 0.5));
    assert_eq!(Matrix::<u8, 2, 2>::from_fn(|row, col| (row * 2 + col) as u8), Matrix::new([[0, 1], [2, 3]]));
}

#[test]
#[should_panic]
fn test_from_slice_too_short() {
    let _ = Matrix::<f32, 2, 2>::from_slice(&[1.0, 2.0, 3.0]);
}

#[test]
fn test_cast() {
    let matrix = Matrix::new([[1.5f32, -2.75], [3.0, 250.9]]);

    assert_eq!(matrix.cast::<i32>(), Matrix::new([[1, -2], [3, 250]]));
    assert_eq!(matrix.cast::<u8>(), Matrix::new([[1, 0], [3, 250]]));
    assert_eq!(Matrix::new([[1i32, -7]]).cast::<f64>(), Matrix::new([[1.0, -7.0]]));
}

#[test]
fn test_matrix_access() {
    #[rustfmt::skip]
    let mut matrix = Matrix::new([
        [01, 02, 03, 04],
        [05, 06, 07, 08],
        [09, 10, 11, 12],
    ]);

    assert_eq!(matrix.at(2, 1), 10);
    assert_eq!(matrix[(1, 3)], 8);
    assert_eq!(matrix[0][2], 3);
    assert_eq!(matrix.get(2, 3), Some(&12));
    assert_eq!(matrix.get(3, 0), None);
    assert_eq!(matrix.get(0, 4), None);
    assert_eq!(unsafe { *matrix.get_unchecked(1, 0) }, 5);

    assert_eq!(matrix.row(1), Vector::new([5, 6, 7, 8]));
    assert_eq!(matrix.column(3), Vector::new([4, 8, 12]));
    assert_eq!(matrix.try_column(4), None);
    assert_eq!(matrix.rows().len(), 3);

    matrix.set(0, 0, 100);
    *matrix.at_mut(2, 3) = 120;
    if let Some(elem) = matrix.get_mut(1, 1) {
        *elem = 60;
    }
    *unsafe { matrix.get_unchecked_mut(1, 2) } = 70;

    assert_eq!(matrix.row(0), Vector::new([100, 2, 3, 4]));
    assert_eq!(matrix.row(1), Vector::new([5, 60, 70, 8]));
    assert_eq!(matrix[(2, 3)], 120);

    matrix.set_column(1, Vector::new([-1, -2, -3]));
    assert_eq!(matrix.column(1), Vector::new([-1, -2, -3]));
    assert_eq!(matrix.row(2), Vector::new([9, -3, 11, 120]));

    matrix.set_row(0, Vector::splat(0));
    assert_eq!(matrix.row(0), Vector::new([0, 0, 0, 0]));

    for elem in matrix.iter_mut() {
        *elem *= 2;
    }
    assert_eq!(matrix.as_slice(), &[0, 0, 0, 0, 10, -4, 140, 16, 18, -6, 22, 240]);
}

#[test]
#[should_panic]
fn test_at_out_of_bounds() {
    let matrix = Matrix2::new([[1, 2], [3, 4]]);
    let _ = matrix.at(2, 0);
}

#[test]
#[should_panic]
fn test_column_out_of_bounds() {
    let matrix = Matrix::new([[1, 2, 3]]);
    let _ = matrix.column(3);
}

#[test]
#[should_panic]
fn test_set_column_out_of_bounds() {
    let mut matrix = Matrix::new([[1, 2], [3, 4]]);
    matrix.set_column(2, Vector::new([0, 0]));
}

#[test]
fn test_submatrix() {
    let identity = Matrix4::<i32>::identity();
    let submatrix: Matrix3<i32> = identity.submatrix(0, 0);
    assert_eq!(submatrix, Matrix3::identity());

    #[rustfmt::skip]
    let matrix = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    assert_eq!(matrix.submatrix::<2, 2>(1, 1), Matrix::new([[1, 3], [7, 9]]));
    assert_eq!(matrix.submatrix::<2, 2>(2, 0), Matrix::new([[2, 3], [5, 6]]));
    assert_eq!(matrix.try_submatrix::<2, 2>(3, 0), None);
    assert_eq!(matrix.try_submatrix::<2, 2>(0, 3), None);

    let wide = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(wide.submatrix::<1, 2>(1, 1), Matrix::new([[1, 3]]));
}

#[test]
#[should_panic]
fn test_submatrix_out_of_bounds() {
    let matrix = Matrix3::<f32>::identity();
    let _ = matrix.submatrix::<2, 2>(1, 3);
}

#[test]
fn test_transpose() {
    #[rustfmt::skip]
    let mut mat = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let transposed = Matrix::new([
        [1, 4, 7],
        [2, 5, 8],
        [3, 6, 9],
    ]);

    assert_eq!(mat.transpose(), transposed);
    mat.transpose_in_place();
    assert_eq!(mat, transposed);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2],
        [3, 4],
        [5, 6],
    ]);
    #[rustfmt::skip]
    let transposed = Matrix::new([
        [1, 3, 5],
        [2, 4, 6],
    ]);

    assert_eq!(mat.transpose(), transposed);
    assert_eq!(mat.transpose().transpose(), mat);

    let mat = Matrix::new([[1, 2, 3, 4]]);
    assert_eq!(mat.transpose(), Matrix::new([[1], [2], [3], [4]]));
}

#[test]
fn test_add_sub_neg() {
    let lhs = Matrix::new([[1, 2], [3, 4]]);
    let rhs = Matrix::new([[10, 20], [30, 40]]);

    assert_eq!(lhs + rhs, Matrix::new([[11, 22], [33, 44]]));
    assert_eq!(rhs - lhs, Matrix::new([[9, 18], [27, 36]]));
    assert_eq!(-lhs, Matrix::new([[-1, -2], [-3, -4]]));

    let mut matrix = lhs;
    matrix += rhs;
    assert_eq!(matrix, lhs + rhs);
    matrix -= lhs;
    assert_eq!(matrix, rhs);
}

#[test]
fn test_elementwise() {
    let lhs = Matrix::new([[2.0f64, 9.0], [-4.0, 1.0]]);
    let rhs = Matrix::new([[4.0f64, 3.0], [2.0, 8.0]]);

    assert_eq!(lhs.elementwise_mul(rhs), Matrix::new([[8.0, 27.0], [-8.0, 8.0]]));
    assert_eq!(lhs.elementwise_div(rhs), Matrix::new([[0.5, 3.0], [-2.0, 0.125]]));

    let mut matrix = lhs;
    matrix.elementwise_mul_assign(rhs).elementwise_div_assign(rhs);
    assert_eq!(matrix, lhs);

    let by_zero = Matrix::new([[1.0f64, -1.0]]).elementwise_div(Matrix::splat(0.0f64));
    assert_eq!(by_zero.at(0, 0), f64::INFINITY);
    assert_eq!(by_zero.at(0, 1), f64::NEG_INFINITY);
}

#[test]
fn test_matrix_multiply() {
    #[rustfmt::skip]
    let m1 = Matrix4::new([
        [15, 07, 09, 10],
        [02, 03, 03, 08],
        [08, 10, 02, 03],
        [03, 03, 04, 08],
    ]);

    #[rustfmt::skip]
    let m2 = Matrix4::new([
        [03, 10, 12, 18],
        [12, 01, 04, 09],
        [09, 10, 12, 02],
        [03, 12, 04, 10],
    ]);

    #[rustfmt::skip]
    let result = Matrix4::new([
        [240, 367, 356, 451],
        [093, 149, 104, 149],
        [171, 146, 172, 268],
        [105, 169, 128, 169],
    ]);

    assert_eq!(m1 * m2, result);

    let mut product = m1;
    product *= m2;
    assert_eq!(product, result);

    #[rustfmt::skip]
    let lhs = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
    ]);
    #[rustfmt::skip]
    let rhs = Matrix::new([
        [07, 08],
        [09, 10],
        [11, 12],
    ]);

    assert_eq!(lhs * rhs, Matrix::new([[58, 64], [139, 154]]));

    let row = Vector::new([1, 2, 3]).to_row_vector();
    let col = Matrix::new([[4], [5], [6]]);
    assert_eq!(row * col, Matrix::new([[32]]));

    #[rustfmt::skip]
    assert_eq!(col * row, Matrix::new([
        [04, 08, 12],
        [05, 10, 15],
        [06, 12, 18],
    ]));
}

#[test]
fn test_identity_law() {
    let m2 = Matrix2::new([[3, -1], [7, 2]]);
    assert_eq!(Matrix2::identity() * m2, m2);
    assert_eq!(m2 * Matrix2::identity(), m2);

    let m3 = Matrix3::new([[1.5, 0.0, -2.0], [4.0, 3.25, 1.0], [0.5, -6.0, 2.0]]);
    assert_eq!(Matrix3::identity() * m3, m3);
    assert_eq!(m3 * Matrix3::identity(), m3);

    let m4 = Matrix4::<i64>::from_fn(|row, col| (row * 4 + col) as i64 - 7);
    assert_eq!(Matrix4::identity() * m4, m4);
    assert_eq!(m4 * Matrix4::identity(), m4);
}

#[test]
fn test_matrix_vector_multiply() {
    let identity = Matrix2::<i32>::identity();
    assert_eq!(identity * Vector::new([5, 7]), Vector::new([5, 7]));

    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    assert_eq!(matrix * Vector::new([1, 0, -1]), Vector::new([-2, -2]));
}

#[test]
fn test_row_column_vector_round_trip() {
    let vector = Vector::new([1.5, -2.0, 0.0, 8.25]);
    let row = vector.to_row_vector();

    assert_eq!(row.dimensions(), Vector::new([1, 4]));
    assert_eq!(row.row(0), vector);
    assert_eq!(row.to_column_vector(), vector);
    assert_eq!(Matrix::from_row_vector(vector), row);
}

#[test]
fn test_scalar_multiply() {
    let matrix: Mat2 = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    let doubled = Matrix2::new([[2.0, 4.0], [6.0, 8.0]]);

    assert_eq!(matrix * 2.0, doubled);
    assert_eq!(2.0f32 * matrix, doubled);

    let mut halved = doubled;
    halved *= 0.5;
    assert_eq!(halved, matrix);

    assert_eq!(Matrix::new([[1i32, -2]]) * 3, Matrix::new([[3, -6]]));
}

#[test]
fn test_pow() {
    let matrix = Matrix2::new([[1, 2], [3, 4]]);

    assert_eq!(matrix.pow(0), Matrix2::identity());
    assert_eq!(matrix.pow(1), matrix);
    assert_eq!(matrix.pow(2), matrix * matrix);
    assert_eq!(matrix.pow(3), Matrix2::new([[37, 54], [81, 118]]));

    let mut scaled = Matrix2::new([[2, 0], [0, 2]]);
    scaled.pow_assign(3);
    assert_eq!(scaled, Matrix2::new([[8, 0], [0, 8]]));

    let mut matrix = Matrix3::new([[1.0, 0.5, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    matrix.pow_assign(0);
    assert_eq!(matrix, Matrix3::identity());
}

#[test]
fn test_dimensions() {
    assert_eq!(Matrix::<f32, 3, 4>::ZERO.dimensions(), Vector::new([3, 4]));
    assert_eq!(Mat2::identity().dimensions(), Vector::new([2, 2]));
}

#[test]
fn test_hash() {
    let m1 = Matrix::new([[1.0, 0.0], [2.5, -4.0]]);
    let m2 = Matrix::new([[1.0, -0.0], [2.5, -4.0]]);

    assert_eq!(m1, m2);
    assert_eq!(m1.hash_code(), m2.hash_code());
    assert_eq!(std_hash(&m1), std_hash(&m2));

    let swapped = Matrix::new([[2, 1]]);
    assert_ne!(Matrix::new([[1, 2]]).hash_code(), swapped.hash_code());
    assert_ne!(Matrix::new([[1], [2]]).hash_code(), Matrix::new([[2], [1]]).hash_code());
}

#[test]
fn test_hash_wide_integers() {
    assert_ne!(Matrix::new([[0i128]]).hash_code(), Matrix::new([[-1i128]]).hash_code());
    assert_ne!(Matrix::new([[0i128, 5]]).hash_code(), Matrix::new([[-1i128, 5]]).hash_code());
    assert_ne!(Matrix::new([[0u128]]).hash_code(), Matrix::new([[u128::MAX]]).hash_code());
}

#[test]
fn test_element_counts() {
    assert_eq!(Matrix::<f32, 2, 3>::NUM_ELEMENTS, 6);
    assert_eq!(Matrix4::<i32>::identity().as_slice().len(), Matrix4::<i32>::NUM_ELEMENTS);
    assert_eq!(Vector::<u8, 3>::LENGTH, 3);
}

#[test]
#[should_panic(expected = "index out of bounds")]
fn test_row_index_out_of_bounds() {
    let matrix = Matrix::new([[1, 2], [3, 4]]);
    let _ = matrix[2];
}

#[test]
fn test_display() {
    let matrix = Matrix::new([[1, 2, 3], [-4, 5, 6]]);
    assert_eq!(format!("{matrix}"), "[1, 2, 3]\n[-4, 5, 6]");
}

#[test]
fn test_determinant() {
    #[rustfmt::skip]
    let mat = Matrix::new([
        [3, 8],
        [4, 6],
    ]);

    assert_eq!(mat.determinant(), -14);
    assert_eq!(Matrix2::new([[1, 2], [3, 4]]).determinant(), -2);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 1],
        [0, 3, 0],
        [4, 1, 2],
    ]);

    assert_eq!(mat.determinant(), -6);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]);

    assert_eq!(mat.determinant(), 26);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [00, -1, 2],
        [03, 02, 0],
        [-1, 03, 2],
    ]);

    assert_eq!(mat.determinant(), 28);
    assert_eq!(Matrix3::<f64>::identity().determinant(), 1.0);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    assert_eq!(mat.determinant(), 35);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [02, 01, 00, 3],
        [04, -1, 02, 0],
        [-3, 02, 01, 5],
        [01, 00, -2, 3],
    ]);

    assert_eq!(mat.determinant(), -85);
    assert_eq!(Matrix::<i32, 4, 4>::identity().determinant(), 1);
}

#[test]
fn test_minor() {
    #[rustfmt::skip]
    let mat = Matrix3::new([
        [3, 1, 2],
        [0, 2, 5],
        [2, 0, 4],
    ]);

    assert_eq!(mat.minor(1, 1), 8);
    assert_eq!(mat.minor(0, 2), -4);

    #[rustfmt::skip]
    let mat = Matrix4::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    assert_eq!(mat.minor(0, 0), mat.submatrix::<3, 3>(0, 0).determinant());
    assert_eq!(Matrix4::<i32>::identity().minor(2, 2), 1);
    assert_eq!(Matrix4::<i32>::identity().minor(2, 1), 0);
}

#[test]
fn test_determinant_multiplicativity() {
    #[rustfmt::skip]
    let a = Matrix4::new([
        [02, 01, 3, 4],
        [00, -1, 2, 1],
        [03, 02, 0, 5],
        [-1, 03, 2, 1],
    ]);

    #[rustfmt::skip]
    let b = Matrix4::new([
        [02, 01, 00, 3],
        [04, -1, 02, 0],
        [-3, 02, 01, 5],
        [01, 00, -2, 3],
    ]);

    assert_eq!((a * b).determinant(), a.determinant() * b.determinant());

    let a: Mat2d = Matrix2::new([[1.5, -2.0], [0.25, 4.0]]);
    let b: Mat2d = Matrix2::new([[3.0, 1.0], [-1.0, 0.5]]);
    assert_relative_eq!((a * b).determinant(), a.determinant() * b.determinant(), epsilon = 1e-12);

    let a: Mat3d = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    let b: Mat3d = Matrix3::new([[1.0, 0.0, 2.0], [-1.0, 3.0, 1.0], [2.0, 1.0, 0.0]]);
    assert_relative_eq!((a * b).determinant(), -135.0, epsilon = 1e-9);
    assert_relative_eq!((a * b).determinant(), a.determinant() * b.determinant(), epsilon = 1e-9);
}

#[test]
fn test_adjugate() {
    #[rustfmt::skip]
    let mat = Matrix::new([
        [03, 6],
        [-4, 8],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [8, -6],
        [4, 03],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);
    assert_eq!(Matrix2::new([[1, 2], [3, 4]]).adjugate(), Matrix2::new([[4, -2], [-3, 1]]));

    #[rustfmt::skip]
    let mat = Matrix::new([
        [1, 2, 3],
        [4, 5, 6],
        [7, 8, 9],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [-3, 006, -3],
        [06, -12, 06],
        [-3, 006, -3],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);

    #[rustfmt::skip]
    let mat = Matrix::new([
        [05, -2, 02, 7],
        [01, 00, 00, 3],
        [-3, 01, 05, 0],
        [03, -1, -9, 4],
    ]);

    #[rustfmt::skip]
    let expected_adjugate = Matrix::new([
        [-12, 076, -60, -36],
        [-56, 208, -82, -58],
        [004, 004, -02, -10],
        [004, 004, 020, 012],
    ]);

    assert_eq!(mat.adjugate(), expected_adjugate);
}

#[test]
fn test_adjugate_identity() {
    let m2 = Matrix2::new([[3i32, 6], [-4, 8]]);
    assert_eq!(m2 * m2.adjugate(), Matrix2::<i32>::identity() * m2.determinant());

    let m3 = Matrix3::new([[4i32, 7, 2], [3, 6, 1], [2, 5, 3]]);
    assert_eq!(m3 * m3.adjugate(), Matrix3::<i32>::identity() * m3.determinant());

    #[rustfmt::skip]
    let m4 = Matrix4::new([
        [05i32, -2, 02, 7],
        [01, 00, 00, 3],
        [-3, 01, 05, 0],
        [03, -1, -9, 4],
    ]);
    assert_eq!(m4.determinant(), 88);
    assert_eq!(m4 * m4.adjugate(), Matrix4::<i32>::identity() * 88);
    assert_eq!(m4.adjugate() * m4, Matrix4::<i32>::identity() * 88);
}

#[test]
fn test_inverse() {
    let matrix: Mat2d = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(matrix.inverse(), Matrix2::new([[-2.0, 1.0], [1.5, -0.5]]));
    assert_eq!(matrix.inverse_checked(), Some(matrix.inverse()));

    let identity = Matrix3::<f64>::identity();
    assert_eq!(identity.inverse(), identity);

    let matrix: Mat3d = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    let inverse = matrix.inverse();

    assert_relative_eq!(inverse.at(0, 0), 13.0 / 9.0, epsilon = 1e-12);
    assert_relative_eq!(inverse.at(2, 1), -2.0 / 3.0, epsilon = 1e-12);
    assert_elems_close(matrix * inverse, Matrix3::identity());
    assert_elems_close(inverse * matrix, Matrix3::identity());

    let singular = Matrix3::new([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(singular.inverse_checked(), None);
    assert_eq!(Matrix2::<f64>::ZERO.inverse_checked(), None);
    assert!(Matrix2::<f64>::ZERO.inverse().iter().all(|elem| !elem.is_finite()));
}

#[test]
fn test_square_views_alias() {
    let mut m2 = Matrix2::<i32>::ZERO;
    m2.set(0, 1, 5);
    assert_eq!(m2.b, 5);
    assert_eq!(m2.positional().e01, 5);
    assert_eq!(m2[0], Vector::new([0, 5]));

    m2.c = 9;
    assert_eq!(m2.at(1, 0), 9);
    assert_eq!(m2.positional().e10, 9);

    let mut m3 = Matrix3::<i32>::ZERO;
    m3.set(1, 2, 7);
    assert_eq!(m3[1][2], 7);
    assert_eq!(m3.row(1), Vector::new([0, 0, 7]));
    assert_eq!(m3.f, 7);
    assert_eq!(m3.positional().e12, 7);

    m3.positional_mut().e20 = 4;
    assert_eq!(m3.g, 4);
    assert_eq!(m3.at(2, 0), 4);

    m3.i = 9;
    assert_eq!(m3[(2, 2)], 9);
    assert_eq!(m3.as_slice()[8], 9);

    let mut m4 = Matrix4::<f32>::identity();
    m4.set(3, 2, -1.5);
    assert_eq!(m4.o, -1.5);
    assert_eq!(m4.positional().e32, -1.5);
    assert_eq!(m4.column(2), Vector::new([0.0, 0.0, 1.0, -1.5]));

    m4.alphabetic_mut().d = 2.0;
    m4[1][0] = 3.0;
    assert_eq!(m4.positional().e03, 2.0);
    assert_eq!(m4.e, 3.0);
    assert_eq!((m4.a, m4.f, m4.k, m4.p), (1.0, 1.0, 1.0, 1.0));

    let fields = crate::fields::Positional3::from(Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
    assert_eq!(fields.e21, 8);
    assert_eq!(Matrix3::from(fields), Matrix3::new([[1, 2, 3], [4, 5, 6], [7, 8, 9]]));
}

#[cfg(feature = "mint")]
#[test]
fn test_mint_conversions() {
    use mint::{ColumnMatrix2x3, RowMatrix2};

    let mint_matrix = ColumnMatrix2x3 {
        x: [1.0, 2.0].into(),
        y: [3.0, 4.0].into(),
        z: [5.0, 6.0].into(),
    };

    let matrix: Matrix<f64, 2, 3> = mint_matrix.into();
    assert_eq!(matrix, Matrix::new([[1.0, 3.0, 5.0], [2.0, 4.0, 6.0]]));

    let back: ColumnMatrix2x3<f64> = matrix.into();
    assert_eq!(back, mint_matrix);

    let row_major: RowMatrix2<i32> = Matrix2::new([[1, 2], [3, 4]]).into();
    assert_eq!(row_major.y, [3, 4].into());
    assert_eq!(Matrix2::from(row_major), Matrix2::new([[1, 2], [3, 4]]));
}

#[cfg(feature = "serde")]
#[test]
fn test_serde() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let json = serde_json::to_string(&matrix).unwrap();
    assert_eq!(json, "[[1,2,3],[4,5,6]]");

    let parsed: Matrix<i32, 2, 3> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, matrix);

    assert!(serde_json::from_str::<Matrix<i32, 2, 3>>("[[1,2,3],[4,5]]").is_err());
    assert!(serde_json::from_str::<Matrix<i32, 2, 3>>("[[1,2,3]]").is_err());
}

#[cfg(feature = "approx")]
#[test]
fn test_approx() {
    let matrix: Mat3d = Matrix3::new([[4.0, 7.0, 2.0], [3.0, 6.0, 1.0], [2.0, 5.0, 3.0]]);
    assert_relative_eq!(matrix * matrix.inverse(), Mat3d::identity(), epsilon = 1e-12);
    approx::assert_abs_diff_ne!(matrix, Mat3d::identity());
}

#[cfg(feature = "matrixcompare")]
#[test]
fn test_matrixcompare() {
    let matrix = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    let expected = Matrix::<i32, 2, 3>::from_fn(|row, col| (row * 3 + col + 1) as i32);
    matrixcompare::assert_matrix_eq!(matrix, expected);
}

#[cfg(feature = "bytemuck")]
#[test]
fn test_bytemuck() {
    let matrix: Mat2 = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    let flat: [f32; 4] = bytemuck::cast(matrix);
    assert_eq!(flat, [1.0, 2.0, 3.0, 4.0]);
    assert_eq!(bytemuck::cast::<[f32; 4], Mat2>(flat), matrix);
}
