use sea_orm::{
    ColumnTrait, Condition, EntityTrait, QueryFilter, Select,
    sea_query::{Expr, Func},
};

/// Case-insensitive substring match over one or more columns.
pub trait ContainsIgnoreCase {
    /// Keep rows where any of `columns` contains `needle`, ignoring case.
    /// `%`, `_` and `\` in `needle` match literally.
    fn contains_ignore_case<C: ColumnTrait>(self, columns: &[C], needle: &str) -> Self;
}

impl<E> ContainsIgnoreCase for Select<E>
where
    E: EntityTrait,
{
    fn contains_ignore_case<C: ColumnTrait>(self, columns: &[C], needle: &str) -> Self {
        let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
        let condition = columns.iter().fold(Condition::any(), |cond, col| {
            cond.add(Expr::expr(Func::lower(Expr::col(*col))).like(pattern.clone()))
        });
        self.filter(condition)
    }
}

fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
