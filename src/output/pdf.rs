use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref};

use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::layout::flow::Document;

const PT_PER_MM: f32 = 72.0 / 25.4;
const IMAGE: Name<'static> = Name(b"Im0");

/// Encode `doc` as a PDF with one full-page DeviceRGB image per page.
///
/// Objects are numbered catalog 1, page tree 2, then page, content stream and image for each page.
pub fn encode_pdf(doc: &Document) -> BrandpressResult<Vec<u8>> {
    if doc.pages.is_empty() {
        return Err(BrandpressError::validation(format!(
            "document '{}' has no pages",
            doc.title
        )));
    }
    let w = doc.geometry.width_mm as f32 * PT_PER_MM;
    let h = doc.geometry.height_mm as f32 * PT_PER_MM;

    let catalog_id = Ref::new(1);
    let tree_id = Ref::new(2);
    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);

    let mut kids = Vec::with_capacity(doc.pages.len());
    for (i, canvas) in doc.pages.iter().enumerate() {
        let index = i32::try_from(i).map_err(|_| BrandpressError::validation("too many pages"))?;
        let base = 3 + 3 * index;
        let page_id = Ref::new(base);
        let content_id = Ref::new(base + 1);
        let image_id = Ref::new(base + 2);
        kids.push(page_id);

        let width = i32::try_from(canvas.width())
            .map_err(|_| BrandpressError::validation("page raster too wide"))?;
        let height = i32::try_from(canvas.height())
            .map_err(|_| BrandpressError::validation("page raster too tall"))?;
        let mut image = pdf.image_xobject(image_id, canvas.as_raw());
        image.width(width);
        image.height(height);
        image.color_space().device_rgb();
        image.bits_per_component(8);
        image.finish();

        let mut content = Content::new();
        content.save_state();
        content.transform([w, 0.0, 0.0, h, 0.0, 0.0]);
        content.x_object(IMAGE);
        content.restore_state();
        pdf.stream(content_id, &content.finish());

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, w, h));
        page.parent(tree_id);
        page.contents(content_id);
        page.resources().x_objects().pair(IMAGE, image_id);
        page.finish();
    }

    let count =
        i32::try_from(kids.len()).map_err(|_| BrandpressError::validation("too many pages"))?;
    pdf.pages(tree_id).kids(kids).count(count);
    Ok(pdf.finish())
}

#[cfg(test)]
#[path = "../../tests/unit/output/pdf.rs"]
mod tests;
