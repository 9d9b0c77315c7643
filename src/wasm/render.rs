use js_sys::Float32Array;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer,
    WebGlProgram, WebGlShader, WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::background::{Frame, Surface};
use crate::config::BackgroundConfig;
use crate::field::ParticleField;

use super::dom;

const VERTEX_SHADER: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_model_view;
uniform mat4 u_projection;
uniform float u_size;
uniform float u_scale;

void main() {
    vec4 mv = u_model_view * vec4(a_position, 1.0);
    // size attenuation: world-space size projected to pixels
    gl_PointSize = u_size * (u_scale / -mv.z);
    gl_Position = u_projection * mv;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 300 es
precision mediump float;
uniform vec3 u_color;
uniform float u_opacity;
out vec4 out_color;

void main() {
    out_color = vec4(u_color, u_opacity);
}
"#;

struct Uniforms {
    model_view: Option<WebGlUniformLocation>,
    projection: Option<WebGlUniformLocation>,
    size: Option<WebGlUniformLocation>,
    scale: Option<WebGlUniformLocation>,
}

/// WebGL2 point-cloud renderer drawing into a canvas appended to the
/// background container.
pub struct GlPoints {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    buffer: WebGlBuffer,
    uniforms: Uniforms,
    count: i32,
    pixel_ratio: f64,
    point_size: f32,
}

impl GlPoints {
    pub fn new(
        document: &Document,
        container: &Element,
        config: &BackgroundConfig,
    ) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        container.append_child(&canvas)?;

        let gl: GL = canvas
            .get_context("webgl2")?
            .ok_or("WebGL2 not supported")?
            .dyn_into()?;

        let vs = compile(&gl, GL::VERTEX_SHADER, VERTEX_SHADER)?;
        let fs = compile(&gl, GL::FRAGMENT_SHADER, FRAGMENT_SHADER)?;
        let program = link(&gl, &vs, &fs)?;
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));
        gl.use_program(Some(&program));

        let uniforms = Uniforms {
            model_view: gl.get_uniform_location(&program, "u_model_view"),
            projection: gl.get_uniform_location(&program, "u_projection"),
            size: gl.get_uniform_location(&program, "u_size"),
            scale: gl.get_uniform_location(&program, "u_scale"),
        };
        let [r, g, b] = config.rgb();
        gl.uniform3f(gl.get_uniform_location(&program, "u_color").as_ref(), r, g, b);
        gl.uniform1f(
            gl.get_uniform_location(&program, "u_opacity").as_ref(),
            config.opacity,
        );

        let vao = gl.create_vertex_array().ok_or("failed to create vertex array")?;
        let buffer = gl.create_buffer().ok_or("failed to create buffer")?;
        gl.bind_vertex_array(Some(&vao));
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let loc = gl.get_attrib_location(&program, "a_position");
        if loc < 0 {
            return Err("a_position attribute missing".into());
        }
        gl.enable_vertex_attrib_array(loc as u32);
        gl.vertex_attrib_pointer_with_i32(loc as u32, 3, GL::FLOAT, false, 0, 0);

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);

        Ok(Self {
            gl,
            canvas,
            program,
            vao,
            buffer,
            uniforms,
            count: 0,
            pixel_ratio: 1.0,
            point_size: config.point_size,
        })
    }
}

impl Surface for GlPoints {
    fn upload_points(&mut self, field: &ParticleField) {
        let array = Float32Array::from(field.to_flat().as_slice());
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(&self.buffer));
        self.gl
            .buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        self.count = field.len() as i32;
    }

    fn set_pixel_ratio(&mut self, ratio: f64) {
        self.pixel_ratio = if ratio > 0.0 { ratio } else { 1.0 };
    }

    fn set_size(&mut self, width: u32, height: u32) {
        // Backing store in device pixels, CSS size in CSS pixels.
        let w = (width as f64 * self.pixel_ratio) as u32;
        let h = (height as f64 * self.pixel_ratio) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
        dom::set_style(&self.canvas, "width", &format!("{width}px"));
        dom::set_style(&self.canvas, "height", &format!("{height}px"));
        self.gl.viewport(0, 0, w as i32, h as i32);
        self.gl
            .uniform1f(self.uniforms.scale.as_ref(), h as f32 / 2.0);
    }

    fn render(&mut self, frame: &Frame) {
        let gl = &self.gl;
        gl.clear(GL::COLOR_BUFFER_BIT);
        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));

        let model_view = frame.view * frame.model;
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.model_view.as_ref(),
            false,
            &model_view.to_cols_array(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.uniforms.projection.as_ref(),
            false,
            &frame.projection.to_cols_array(),
        );
        gl.uniform1f(self.uniforms.size.as_ref(), self.point_size);
        gl.draw_arrays(GL::POINTS, 0, self.count);
    }

    fn release(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
        self.gl.delete_vertex_array(Some(&self.vao));
        self.gl.delete_program(Some(&self.program));
        self.canvas.remove();
        self.count = 0;
    }
}

fn compile(gl: &GL, kind: u32, source: &str) -> Result<WebGlShader, JsValue> {
    let shader = gl.create_shader(kind).ok_or("failed to create shader")?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(format!("shader compile failed: {info}").into())
    }
}

fn link(gl: &GL, vs: &WebGlShader, fs: &WebGlShader) -> Result<WebGlProgram, JsValue> {
    let program = gl.create_program().ok_or("failed to create program")?;
    gl.attach_shader(&program, vs);
    gl.attach_shader(&program, fs);
    gl.link_program(&program);
    let ok = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(program)
    } else {
        let info = gl.get_program_info_log(&program).unwrap_or_default();
        gl.delete_program(Some(&program));
        Err(format!("program link failed: {info}").into())
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container(document: &Document) -> Element {
        let el = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn backing_store_scales_with_pixel_ratio() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = container(&document);
        let mut points = GlPoints::new(&document, &host, &BackgroundConfig::default()).unwrap();

        points.set_pixel_ratio(2.0);
        points.set_size(320, 160);
        assert_eq!(points.canvas.width(), 640);
        assert_eq!(points.canvas.height(), 320);
        let style = points.canvas.style();
        assert_eq!(style.get_property_value("width").unwrap(), "320px");
        assert_eq!(style.get_property_value("height").unwrap(), "160px");

        let field = ParticleField::generate(10, 60.0, &mut fastrand::Rng::with_seed(3));
        points.upload_points(&field);
        assert_eq!(points.count, 10);

        points.release();
        assert!(host.query_selector("canvas").unwrap().is_none());
        assert_eq!(points.count, 0);
        host.remove();
    }

    #[wasm_bindgen_test]
    fn canvas_lands_in_container() {
        let document = web_sys::window().unwrap().document().unwrap();
        let host = container(&document);
        let _points = GlPoints::new(&document, &host, &BackgroundConfig::default()).unwrap();
        assert_eq!(host.child_element_count(), 1);
        assert!(host.query_selector("canvas").unwrap().is_some());
        host.remove();
    }

    #[wasm_bindgen_test]
    fn bad_shader_is_an_error() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().dyn_into().unwrap();
        let gl: GL = canvas.get_context("webgl2").unwrap().unwrap().dyn_into().unwrap();

        let err = compile(&gl, GL::VERTEX_SHADER, "#version 300 es\nvoid main() { nope }")
            .err()
            .and_then(|e| e.as_string())
            .unwrap();
        assert!(err.starts_with("shader compile failed"), "{err}");

        // Vertex and fragment disagree on the varying type, so linking fails.
        let vs = compile(
            &gl,
            GL::VERTEX_SHADER,
            "#version 300 es\nout vec3 v;\nvoid main() { v = vec3(0.0); gl_Position = vec4(0.0); }",
        )
        .unwrap();
        let fs = compile(
            &gl,
            GL::FRAGMENT_SHADER,
            "#version 300 es\nprecision mediump float;\nin vec2 v;\nout vec4 c;\nvoid main() { c = vec4(v, 0.0, 1.0); }",
        )
        .unwrap();
        let err = link(&gl, &vs, &fs).err().and_then(|e| e.as_string()).unwrap();
        assert!(err.starts_with("program link failed"), "{err}");
    }
}
