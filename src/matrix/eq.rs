use super::Matrix;

impl<T> PartialEq for Matrix<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.num_rows() == other.num_rows()
            && self.num_columns() == other.num_columns()
            && self.elements().eq(other.elements())
    }
}

impl<T> Eq for Matrix<T> where T: Eq {}
