use crate::pattern::Params;

use std::sync::Arc;

pub trait Handler<Q: ?Sized, S: ?Sized> {
    fn call(&self, req: &Q, res: &mut S, params: &Params<'_, '_>);
}

pub type BoxHandler<Q, S> = Arc<dyn Handler<Q, S> + Send + Sync>;

impl<Q: ?Sized, S: ?Sized, F> Handler<Q, S> for F
where
    F: Fn(&Q, &mut S, &Params<'_, '_>),
{
    fn call(&self, req: &Q, res: &mut S, params: &Params<'_, '_>) {
        (self)(req, res, params)
    }
}
